// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_tee::domain::GarmentColor;
use iced_tee::media::model::{mtl, obj, LoadOutcome, MaterialLibrary};
use iced_tee::ui::preview::{render, Scene};
use std::fmt::Write;
use std::hint::black_box;

/// A `rows` x `cols` quad grid, one material per half.
fn synthetic_obj(rows: usize, cols: usize) -> String {
    let mut src = String::from("mtllib shirt.mtl\no Shirt\n");
    for r in 0..=rows {
        for c in 0..=cols {
            let _ = writeln!(src, "v {} {} 0", c as f32 * 0.1, r as f32 * 0.1);
        }
    }
    let stride = cols + 1;
    for r in 0..rows {
        let _ = writeln!(src, "usemtl {}", if r < rows / 2 { "Body" } else { "Sleeves" });
        for c in 0..cols {
            let a = r * stride + c + 1;
            let _ = writeln!(src, "f {} {} {} {}", a, a + 1, a + stride + 1, a + stride);
        }
    }
    src
}

const MTL: &str = "newmtl Body\nKd 0.8 0.8 0.8\nNs 30\nnewmtl Sleeves\nKd 0.5 0.5 0.5\n";

fn model_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_loading");
    let source = synthetic_obj(100, 100);

    group.bench_function("parse_obj_20k_triangles", |b| {
        b.iter(|| {
            let materials = mtl::parse(MTL).unwrap();
            black_box(obj::parse(black_box(&source), materials).unwrap())
        });
    });

    let model = obj::parse(&source, MaterialLibrary::default()).unwrap();
    let mut scene = Scene::new(GarmentColor::Navy);
    let ticket = scene.begin_load();
    scene.finish_load(ticket, Ok(LoadOutcome::Full(model)));
    let size = Size::new(420.0, 560.0);

    group.bench_function("project_frame", |b| {
        let model = scene.model().unwrap();
        let view_projection = scene.orbit().view_projection(size.width / size.height);
        let eye = scene.orbit().eye();
        b.iter(|| {
            black_box(render::project_model(
                model,
                scene.materials(),
                &view_projection,
                eye,
                size,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, model_loading_benchmark);
criterion_main!(benches);
