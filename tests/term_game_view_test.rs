use tui_snake::core::{Engine, GameSnapshot, ManualClock, ScriptedCells};
use tui_snake::term::game_view::{BODY_FG, FOOD_FG, GAME_OVER_TEXT, HEAD_FG, IDLE_TEXT};
use tui_snake::term::{GameView, Viewport};
use tui_snake::types::{Cell as BoardCell, Direction, Phase};

fn running_snapshot() -> GameSnapshot {
    let mut engine = Engine::new(ManualClock::new(), ScriptedCells::new(vec![BoardCell::new(3, 4)]));
    engine.start();
    engine
        .load_position(
            &[BoardCell::new(5, 5), BoardCell::new(4, 5), BoardCell::new(3, 5)],
            Direction::Right,
            BoardCell::new(3, 4),
        )
        .unwrap();
    engine.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // 20 cells * 2 columns + border = 42 wide, 20 rows + border = 22 tall.
    let fb = view.render(&snap, true, Viewport::new(42, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(41, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_paints_cells_two_columns_wide() {
    let snap = running_snapshot();
    let view = GameView::default();
    let vp = Viewport::new(42, 22);
    let fb = view.render(&snap, true, vp);

    // Head at (5,5): inside border at (1,1), each cell 2 columns wide.
    let (hx, hy) = view.cell_origin(vp, BoardCell::new(5, 5));
    assert_eq!((hx, hy), (9, 5));
    for dx in 0..2 {
        let cell = fb.get(hx + dx, hy).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, HEAD_FG);
        assert!(cell.style.bold);
    }

    let (bx, by) = view.cell_origin(vp, BoardCell::new(3, 5));
    assert_eq!(fb.get(bx, by).unwrap().style.fg, BODY_FG);

    let (fx, fy) = view.cell_origin(vp, BoardCell::new(3, 4));
    assert_eq!(fb.get(fx + 1, fy).unwrap().style.fg, FOOD_FG);

    // Empty cells show the grid dot.
    let (ex, ey) = view.cell_origin(vp, BoardCell::new(20, 20));
    assert_eq!(fb.get(ex, ey).unwrap().ch, '·');
}

#[test]
fn term_view_keeps_food_visible_on_the_body() {
    let mut snap = running_snapshot();
    snap.food = Some(BoardCell::new(4, 5));

    let view = GameView::default();
    let vp = Viewport::new(42, 22);
    let fb = view.render(&snap, true, vp);

    let (x, y) = view.cell_origin(vp, BoardCell::new(4, 5));
    assert_eq!(fb.get(x, y).unwrap().style.fg, FOOD_FG);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = running_snapshot();
    snap.score = 120;
    snap.speed_ms = 80;

    let view = GameView::default();
    let text = view.render(&snap, true, Viewport::new(80, 24)).text();

    assert!(text.contains("SCORE"));
    assert!(text.contains("120"));
    assert!(text.contains("80ms"));
    assert!(text.contains("LENGTH"));
    assert!(text.contains("ENTER stop"));
}

#[test]
fn term_view_omits_side_panel_on_narrow_viewports() {
    let snap = running_snapshot();
    let text = GameView::default().render(&snap, true, Viewport::new(42, 22)).text();
    assert!(!text.contains("SCORE"));
}

#[test]
fn term_view_game_over_overlay_follows_visibility_flag() {
    let mut snap = running_snapshot();
    snap.phase = Phase::Ended;

    let view = GameView::default();
    let vp = Viewport::new(42, 22);
    assert!(view.render(&snap, true, vp).text().contains(GAME_OVER_TEXT));
    assert!(!view.render(&snap, false, vp).text().contains(GAME_OVER_TEXT));

    // Never shown while running, whatever the flag says.
    snap.phase = Phase::Running;
    assert!(!view.render(&snap, true, vp).text().contains(GAME_OVER_TEXT));
}

#[test]
fn term_view_prompts_before_first_game() {
    let snap = GameSnapshot::default();
    let text = GameView::default().render(&snap, false, Viewport::new(80, 24)).text();

    assert!(text.contains(IDLE_TEXT));
    assert!(text.contains("SPACE start"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, false, Viewport::new(42, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}
