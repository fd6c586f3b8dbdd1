use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tagwm::{
    config::Config,
    models::{
        action::Action,
        input::{KeySym, ModMask},
        window_rule::WindowProperties,
    },
    services::{ActionHandler, BindingDispatcher, RuleEngine},
    Result,
};

struct NullCore;

impl ActionHandler for NullCore {
    fn handle(&mut self, action: &Action) -> Result<()> {
        black_box(action);
        Ok(())
    }
}

fn benchmark_key_dispatch(c: &mut Criterion) {
    let config = Config::builtin();
    let quit = KeySym::new("q").unwrap();
    let state = ModMask::MOD4 | ModMask::SHIFT | ModMask::CONTROL | ModMask::MOD2;

    c.bench_function("dispatch_last_key_binding", |b| {
        let mut dispatcher = BindingDispatcher::new(config);
        let mut core = NullCore;
        b.iter(|| dispatcher.dispatch_key(black_box(state), black_box(&quit), &mut core))
    });
}

fn benchmark_rule_application(c: &mut Criterion) {
    let config = Config::builtin();
    let engine = RuleEngine::new(config);
    let unmatched = WindowProperties::new("XTerm", "xterm", "bash");
    let scratch = WindowProperties::new("Alacritty", "Alacritty", "Ideas");

    c.bench_function("apply_rules_no_match", |b| b.iter(|| engine.apply(black_box(&unmatched))));
    c.bench_function("apply_rules_last_rule", |b| b.iter(|| engine.apply(black_box(&scratch))));
}

criterion_group!(benches, benchmark_key_dispatch, benchmark_rule_application);
criterion_main!(benches);
