use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_well::core::ascii::well_to_ascii;
use tetris_well::core::piece::Mino;
use tetris_well::core::{RecordingSurface, Session, Well};
use tetris_well::types::{frames, InputEvent, InputType, PieceKind, WELL_WIDTH};

fn bench_idle_frame(c: &mut Criterion) {
    let mut well = Well::new();
    well.add_piece(PieceKind::T);

    c.bench_function("well_update_idle", |b| {
        b.iter(|| {
            well.update(&[], frames(1));
        })
    });
}

fn bench_das_frame(c: &mut Criterion) {
    let mut well = Well::new();
    well.add_piece(PieceKind::L);
    well.update(&[InputEvent::press(InputType::Right)], frames(1));

    c.bench_function("well_update_das_held", |b| {
        b.iter(|| {
            well.update(&[], frames(1));
        })
    });
}

fn bench_tetris_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut well = Well::new();
            for row in 18..22 {
                for col in 1..WELL_WIDTH as i32 {
                    well.matrix_mut().set(col, row, Some(Mino::new(PieceKind::I)));
                }
            }
            well.add_piece(PieceKind::I);
            well.rotate_ccw_now();
            while well.move_left_now() {}
            well.hard_drop();
            for _ in 0..11 {
                well.update(&[], frames(1));
            }
            black_box(well.matrix().occupied_count())
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut well = Well::new();
    well.add_piece(PieceKind::T);

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            black_box(well.rotate_cw_now());
        })
    });
}

fn bench_session_hard_drops(c: &mut Criterion) {
    c.bench_function("session_drop_until_game_over", |b| {
        b.iter(|| {
            let mut session = Session::new(black_box(12345));
            session.start();
            while !session.game_over() {
                session.update(&[InputEvent::press(InputType::HardDrop)], frames(1));
            }
            session.pieces()
        })
    });
}

fn bench_draw_and_dump(c: &mut Criterion) {
    let mut well = Well::new();
    well.add_piece(PieceKind::S);

    c.bench_function("well_draw", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new();
            well.draw(&mut surface, 0, 0);
            black_box(surface.calls.len())
        })
    });

    c.bench_function("well_to_ascii", |b| b.iter(|| black_box(well_to_ascii(&well))));
}

criterion_group!(
    benches,
    bench_idle_frame,
    bench_das_frame,
    bench_tetris_clear,
    bench_rotate,
    bench_session_hard_drops,
    bench_draw_and_dump
);
criterion_main!(benches);
