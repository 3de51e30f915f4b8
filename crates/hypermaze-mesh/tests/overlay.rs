use hypermaze_grid::{Maze, Size4};
use hypermaze_mesh::{
    AXIS_LEGEND, MapHit, MapLayout, QuadBatch, build_goal_mesh, build_hint_mesh, build_map_mesh,
    build_player_mesh,
};
use hypermaze_slice::{AxisMapping, SliceMode};

fn open_maze(size: Size4) -> Maze {
    let count: usize = size.iter().product();
    Maze::from_walls(size, vec![false; count])
}

/// Quads whose vertices all sit on overlay layer `z`.
fn quads_at_layer(batch: &QuadBatch, z: f32) -> usize {
    batch
        .pos
        .chunks_exact(12)
        .filter(|q| q[2] == z && q[5] == z && q[8] == z && q[11] == z)
        .count()
}

// The overlay stacks back-to-front: border -0.1, background 0.0, cells 0.1,
// player 0.2, goal 0.3.
const GOAL_LAYER: f32 = 0.3;
const PLAYER_LAYER: f32 = 0.2;

#[test]
fn map_goal_marker_needs_all_other_axes_aligned() {
    let mut maze = open_maze([2, 2, 2, 2]);
    // Differs from the goal only on axis 1.
    maze.position = [1, 0, 1, 1];
    let batch = build_map_mesh(&maze, &AxisMapping::default());
    // Only strip 1 treats axis 1 as its own; every other strip sees the
    // mismatch and drops its goal marker.
    assert_eq!(quads_at_layer(&batch, GOAL_LAYER), 1);

    maze.position = maze.goal;
    let all = build_map_mesh(&maze, &AxisMapping::default());
    assert_eq!(quads_at_layer(&all, GOAL_LAYER), 4);

    maze.position = [0, 0, 1, 1];
    let two_off = build_map_mesh(&maze, &AxisMapping::default());
    assert_eq!(quads_at_layer(&two_off, GOAL_LAYER), 0);
}

#[test]
fn map_always_marks_the_player_on_each_strip() {
    let maze = open_maze([3, 4, 5, 2]);
    let batch = build_map_mesh(&maze, &AxisMapping::default());
    assert_eq!(quads_at_layer(&batch, PLAYER_LAYER), 4);
}

#[test]
fn map_strip_cells_reflect_walls_along_each_axis() {
    let size = [3, 1, 1, 1];
    let count: usize = size.iter().product();
    let mut cells = vec![false; count];
    cells[1] = true; // wall at [1,0,0,0]
    let maze = Maze::from_walls(size, cells);
    let batch = build_map_mesh(&maze, &AxisMapping::default());
    // Only strip 0 passes through the wall from the player's row.
    assert_eq!(quads_at_layer(&batch, 0.1), 1);
}

#[test]
fn map_layout_hits_strips_and_arrows() {
    let size = [5, 5, 5, 5];
    let layout = MapLayout::new(size);
    let l = layout.cell;
    for d in 0..4 {
        let top = layout.strip_top(d);
        let hw = layout.strip_half_width(d);
        let y = top - l / 2.0;
        assert_eq!(layout.hit(0.0, y), Some(MapHit::Swap(d)));
        assert_eq!(layout.hit(-hw - l, y), Some(MapHit::Step(d, -1)));
        assert_eq!(layout.hit(hw + l, y), Some(MapHit::Step(d, 1)));
        // Past the arrow zone: nothing.
        assert_eq!(layout.hit(hw + 3.0 * l, y), None);
    }
    // Between strips: nothing.
    let gap_y = layout.strip_top(0) - 1.5 * l;
    assert_eq!(layout.hit(0.0, gap_y), None);
}

#[test]
fn map_border_dims_for_the_hidden_axis() {
    let maze = open_maze([2, 2, 2, 2]);
    let layout = MapLayout::new(maze.size());

    // Vertices with the dimmed 0.3 alpha: the hidden strip's border quad
    // (4) plus its two arrows (8).
    let dimmed_ys = |batch: &QuadBatch| -> Vec<f32> {
        batch
            .pos
            .chunks_exact(3)
            .zip(batch.col.chunks_exact(4))
            .filter(|(_, c)| c[3] == 0.3)
            .map(|(p, _)| p[1])
            .collect()
    };

    let mut axes = AxisMapping::default();
    let batch = build_map_mesh(&maze, &axes);
    let ys = dimmed_ys(&batch);
    assert_eq!(ys.len(), 12);
    // Default hidden axis is 3: the dimmed vertices sit on the bottom strip.
    let top3 = layout.strip_top(3);
    assert!(ys.iter().all(|&y| y <= top3 + layout.border * 2.0));

    axes.swap_into_hidden(0);
    let swapped = build_map_mesh(&maze, &axes);
    let ys = dimmed_ys(&swapped);
    assert_eq!(ys.len(), 12);
    // Now the top strip (axis 0) carries the dimmed border.
    let top0 = layout.strip_top(0);
    assert!(ys.iter().all(|&y| y >= top0 - layout.cell - layout.border * 2.0));
}

#[test]
fn goal_marker_gate_tightens_with_slice_mode() {
    let mut maze = open_maze([2, 2, 2, 2]);
    let axes = AxisMapping::default();

    // Hidden axis mismatch hides the goal in every mode.
    maze.position = [1, 1, 1, 0];
    for mode in [SliceMode::ThreeD, SliceMode::TwoD, SliceMode::OneD] {
        assert!(build_goal_mesh(&maze, &axes, mode).is_empty());
    }

    // Hidden matches, zero visible matches: 3D only.
    maze.position = [0, 0, 0, 1];
    assert_eq!(build_goal_mesh(&maze, &axes, SliceMode::ThreeD).quad_count(), 6);
    assert!(build_goal_mesh(&maze, &axes, SliceMode::TwoD).is_empty());
    assert!(build_goal_mesh(&maze, &axes, SliceMode::OneD).is_empty());

    // One visible match adds 2D.
    maze.position = [1, 0, 0, 1];
    assert_eq!(build_goal_mesh(&maze, &axes, SliceMode::TwoD).quad_count(), 6);
    assert!(build_goal_mesh(&maze, &axes, SliceMode::OneD).is_empty());

    // Two visible matches add 1D.
    maze.position = [1, 1, 0, 1];
    assert_eq!(build_goal_mesh(&maze, &axes, SliceMode::OneD).quad_count(), 6);
}

#[test]
fn player_cube_sits_inset_at_display_coordinates() {
    let mut maze = open_maze([3, 3, 3, 3]);
    maze.position = [2, 1, 0, 1];
    let batch = build_player_mesh(&maze, &AxisMapping::default());
    assert_eq!(batch.quad_count(), 6);
    let xs: Vec<f32> = batch.pos.chunks_exact(3).map(|v| v[0]).collect();
    let ys: Vec<f32> = batch.pos.chunks_exact(3).map(|v| v[1]).collect();
    let zs: Vec<f32> = batch.pos.chunks_exact(3).map(|v| v[2]).collect();
    let bounds = |vs: &[f32]| {
        (
            vs.iter().cloned().fold(f32::INFINITY, f32::min),
            vs.iter().cloned().fold(f32::NEG_INFINITY, f32::max),
        )
    };
    let close = |(lo, hi): (f32, f32), want_lo: f32, want_hi: f32| {
        (lo - want_lo).abs() < 1e-5 && (hi - want_hi).abs() < 1e-5
    };
    assert!(close(bounds(&xs), 2.1, 2.9));
    assert!(close(bounds(&ys), 1.1, 1.9));
    assert!(close(bounds(&zs), 0.1, 0.9));
}

#[test]
fn hint_frame_follows_the_axis_legend() {
    let maze = open_maze([2, 2, 2, 2]);
    let mut axes = AxisMapping::default();
    assert!(build_hint_mesh(&maze, &axes, false).is_empty());

    let framed = build_hint_mesh(&maze, &axes, true);
    // Twelve bars, six faces each.
    assert_eq!(framed.quad_count(), 72);
    // Default mapping: a third of the vertices carry each visible legend.
    let count_color = |batch: &QuadBatch, rgba: [f32; 4]| {
        batch
            .col
            .chunks_exact(4)
            .filter(|c| c == &rgba.as_slice())
            .count()
    };
    let verts = framed.vertex_count();
    assert_eq!(count_color(&framed, AXIS_LEGEND[0]), verts / 3);
    assert_eq!(count_color(&framed, AXIS_LEGEND[1]), verts / 3);
    assert_eq!(count_color(&framed, AXIS_LEGEND[2]), verts / 3);
    assert_eq!(count_color(&framed, AXIS_LEGEND[3]), 0);

    // Swapping axis 0 out brings the white axis-3 legend on screen.
    axes.swap_into_hidden(0);
    let swapped = build_hint_mesh(&maze, &axes, true);
    assert_eq!(count_color(&swapped, AXIS_LEGEND[3]), verts / 3);
    assert_eq!(count_color(&swapped, AXIS_LEGEND[0]), 0);
}
