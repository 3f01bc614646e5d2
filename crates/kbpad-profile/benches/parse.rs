use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use kbpad_profile::parse_profile;

const PROFILE: &str = r#"
version: 1
latch: caps_lock
movement:
  left: a
  right: d
  down: s
  up: w
buttons:
  x: l
  b: "'"
  a: ";"
  y: p
  back: z
  start: x
  lb: q
  rb: e
"#;

fn bench_parse_profile(c: &mut Criterion) {
    c.bench_function("profile_parse_full", |b| {
        b.iter(|| {
            let input = black_box(PROFILE);
            let keymap = parse_profile(input).expect("profile should parse");
            black_box(keymap);
        })
    });
}

criterion_group!(benches, bench_parse_profile);
criterion_main!(benches);
