use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scorekeeper::game::{reduce, Action, GameState};
use scorekeeper::layout::{compute_layout, LayoutConfig};
use scorekeeper::types::{TeamId, Viewport};

/// Representative phone and tablet viewports, both orientations
fn device_matrix() -> Vec<Viewport> {
    let sizes = [
        (320.0, 568.0),
        (375.0, 667.0),
        (390.0, 844.0),
        (414.0, 896.0),
        (768.0, 1024.0),
    ];
    sizes
        .iter()
        .flat_map(|&(w, h)| [Viewport::new(w, h), Viewport::new(h, w)])
        .collect()
}

/// A plausible game: a rally of points, a rename and a game win
fn game_actions() -> Vec<Action> {
    let mut actions = Vec::new();
    for i in 0..21 {
        let team = if i % 3 == 0 { TeamId::Team2 } else { TeamId::Team1 };
        actions.push(Action::IncrementScore(team));
    }
    actions.push(Action::DecrementScore(TeamId::Team1));
    actions.push(Action::SetEditFocus(Some(TeamId::Team1)));
    actions.push(Action::CommitName {
        team: TeamId::Team1,
        name: "  Eagles  ".to_string(),
    });
    actions.push(Action::IncrementTally(TeamId::Team1));
    actions.push(Action::ResetScores);
    actions
}

fn bench_compute_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let viewports = device_matrix();

    c.bench_function("compute_layout_device_matrix", |b| {
        b.iter(|| {
            for viewport in &viewports {
                black_box(compute_layout(black_box(*viewport), &config));
            }
        })
    });
}

fn bench_reduce_game(c: &mut Criterion) {
    let actions = game_actions();

    c.bench_function("reduce_full_game", |b| {
        b.iter(|| {
            let state = actions
                .iter()
                .cloned()
                .fold(GameState::default(), reduce);
            black_box(state)
        })
    });
}

criterion_group!(benches, bench_compute_layout, bench_reduce_game);
criterion_main!(benches);
