// tests/snowflake_pipeline.rs
use glam::Vec2;
use lsys_sketch::{Canvas, Grammar, SketchConfig, SketchInterpreter, Task};

fn setup(depth: u32) -> (Grammar, SketchInterpreter) {
    // Koch snowflake: every edge becomes four edges with two 60 degree kinks.
    let grammar = Grammar::new("F++F++F", depth).with_rule('F', "F-F++F-F");
    let interpreter = SketchInterpreter::standard(SketchConfig {
        step: 10.0,
        turn_angle: 60.0,
        origin: Vec2::ZERO,
        ..SketchConfig::default()
    });
    (grammar, interpreter)
}

#[test]
fn test_snowflake_edge_counts_per_generation() {
    // Each generation multiplies the edge count by four: 3, 12, 48.
    for (depth, edges) in [(0, 3), (1, 12), (2, 48)] {
        let (grammar, interpreter) = setup(depth);
        let symbols = grammar.expand().unwrap();
        let sketch = interpreter.build_sketch(&symbols).unwrap();

        assert_eq!(
            sketch.segments.len(),
            edges,
            "depth {depth} should draw {edges} edges"
        );
    }
}

#[test]
fn test_snowflake_strokes_are_contiguous_and_uniform() {
    let (grammar, interpreter) = setup(2);
    let symbols = grammar.expand().unwrap();
    let sketch = interpreter.build_sketch(&symbols).unwrap();

    // No push/pop in this grammar, so every stroke starts where the
    // previous one ended, and every stroke is one step long.
    for pair in sketch.segments.windows(2) {
        assert!(pair[0].to.distance(pair[1].from) < 1e-3);
    }
    for segment in &sketch.segments {
        assert!((segment.length() - 10.0).abs() < 1e-3);
    }
}

#[test]
fn test_snowflake_closes_its_outline() {
    let (grammar, interpreter) = setup(3);
    let symbols = grammar.expand().unwrap();
    let sketch = interpreter.build_sketch(&symbols).unwrap();

    // The snowflake is a closed curve: the last stroke ends where the
    // first began. f32 error accumulates over 192 turns, so the tolerance
    // is loose but far below one step.
    let first = sketch.segments.first().unwrap();
    let last = sketch.segments.last().unwrap();
    assert!(first.from.distance(last.to) < 0.1);
}

#[test]
fn test_task_pipeline_matches_manual_pipeline() {
    let mut task = Task::preset("snowFlake").unwrap();
    task.depth = 2;

    let manual_symbols = task.grammar().unwrap().expand().unwrap();
    let manual = SketchInterpreter::standard(task.sketch_config(Canvas::default()))
        .build_sketch(&manual_symbols)
        .unwrap();
    let rendered = task.render(Canvas::default()).unwrap();

    assert_eq!(rendered.segments, manual.segments);
}
