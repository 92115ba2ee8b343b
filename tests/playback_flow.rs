//! Playback driven through the session orchestrator

use bst_trace::{PlaybackStatus, Visualizer};

#[test]
fn tree_shown_switches_when_insert_lands() {
    let mut viz = Visualizer::new();
    for v in [5, 3] {
        viz.insert(v);
    }
    viz.insert(4);

    let playback = viz.playback_mut();
    let mut shown = Vec::new();
    loop {
        let tree = playback.visible_snapshot().expect("run loaded");
        shown.push(tree.len());
        if playback.next_delay().is_none() {
            break;
        }
        playback.advance();
    }

    // Four narrated steps on the old tree, then the insert on the new one
    assert_eq!(shown, vec![2, 2, 2, 2, 3]);
    assert_eq!(playback.status(), PlaybackStatus::Complete);
}

#[test]
fn search_runs_always_show_after_state() {
    let mut viz = Visualizer::new();
    viz.insert(5);
    let run = viz.search(5).clone();

    // No structural step: the after snapshot is shown throughout
    assert_eq!(viz.playback().visible_snapshot(), Some(&run.after));
    assert_eq!(run.before, run.after);
}

#[test]
fn clear_goes_idle() {
    let mut viz = Visualizer::new();
    viz.insert(5);
    viz.clear();

    assert_eq!(viz.playback().status(), PlaybackStatus::Idle);
    assert_eq!(viz.playback().position_index(), -1);
    assert_eq!(viz.playback().progress(), 0.0);
}
