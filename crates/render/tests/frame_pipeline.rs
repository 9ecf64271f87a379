//! Drives the full per-tick order: input, scheduler, pose, render.

use glam::Vec3;
use rollblock_common::{CellCoord, Orientation};
use rollblock_input::{InputEvent, parse_script};
use rollblock_kernel::{GameState, RollConfig, TickOutcome};
use rollblock_render::{FixedCamera, FrameRenderer, MeshKind, Renderer, cell_origin};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn run_script(script: &str) -> (GameState, Vec<rollblock_render::Frame>) {
    let mut game = GameState::new(RollConfig::default()).unwrap();
    let camera = FixedCamera::default();
    let renderer = FrameRenderer::new();
    let mut frames = Vec::new();

    for key in parse_script(script).unwrap() {
        if game.tick(&[key], FRAME) == TickOutcome::Quit {
            break;
        }
        frames.push(renderer.render(&game, &camera));
        while !game.is_settled() {
            game.tick(&[], FRAME);
            frames.push(renderer.render(&game, &camera));
        }
    }
    (game, frames)
}

#[test]
fn scripted_rolls_end_at_expected_cell() {
    let (game, frames) = run_script("D D U U");
    assert_eq!(game.block().cell, CellCoord::new(5, 5));
    assert_eq!(game.block().orientation, Orientation::Standing);
    assert!(!frames.is_empty());
    assert_eq!(frames.last().unwrap().block().unwrap().mesh, MeshKind::Standing);
}

#[test]
fn every_frame_has_a_finite_block_transform() {
    let (_, frames) = run_script("LURD");
    for frame in &frames {
        let block = frame.block().unwrap();
        assert!(block.model.is_finite());
        assert!(block.mvp.is_finite());
        assert_eq!(frame.draws.len(), 151);
    }
}

#[test]
fn mesh_switches_only_on_commit() {
    let (_, frames) = run_script("L");
    let meshes: Vec<MeshKind> = frames.iter().map(|f| f.block().unwrap().mesh).collect();
    let switch = meshes
        .iter()
        .position(|m| *m == MeshKind::LyingAlongX)
        .unwrap();
    assert!(switch > 0);
    assert!(meshes[..switch].iter().all(|m| *m == MeshKind::Standing));
    assert!(meshes[switch..].iter().all(|m| *m == MeshKind::LyingAlongX));
}

#[test]
fn resting_block_sits_on_its_cell() {
    let (game, frames) = run_script("R");
    let origin = frames.last().unwrap().block().unwrap().model.w_axis.truncate();
    let expected = cell_origin(game.block().cell) + Vec3::new(0.0, 0.2, 0.0);
    assert!((origin - expected).length() < 1e-5);
}

#[test]
fn quit_stops_the_pipeline() {
    let mut game = GameState::new(RollConfig::default()).unwrap();
    game.tick(&[InputEvent::Up], FRAME);
    assert_eq!(game.tick(&[InputEvent::Quit], FRAME), TickOutcome::Quit);
    assert!(game.has_quit());
}
