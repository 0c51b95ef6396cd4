use super::*;

const FALAFEL: MenuItemKey = MenuItemKey { section: 0, item: 1 };
const KNAFEH: MenuItemKey = MenuItemKey { section: 2, item: 0 };

#[test]
fn hover_state_default_has_no_tooltip() {
    let state = HoverState::default();
    assert_eq!(state.tooltip_count(), 0);
    assert!(!state.shows_tooltip(FALAFEL));
}

#[test]
fn enter_shows_tooltip_for_item() {
    let mut state = HoverState::default();
    state.enter(FALAFEL);
    assert!(state.shows_tooltip(FALAFEL));
    assert!(!state.shows_tooltip(KNAFEH));
    assert_eq!(state.tooltip_count(), 1);
}

#[test]
fn enter_leave_twice_leaves_no_tooltips() {
    let mut state = HoverState::default();
    for _ in 0..2 {
        state.enter(FALAFEL);
        state.leave(FALAFEL);
    }
    assert_eq!(state.tooltip_count(), 0);
}

#[test]
fn repeated_enter_does_not_accumulate() {
    let mut state = HoverState::default();
    state.enter(FALAFEL);
    state.enter(FALAFEL);
    state.enter(KNAFEH);
    assert_eq!(state.tooltip_count(), 1);
    assert!(state.shows_tooltip(KNAFEH));
}

#[test]
fn stale_leave_keeps_current_tooltip() {
    let mut state = HoverState::default();
    state.enter(FALAFEL);
    state.enter(KNAFEH);
    state.leave(FALAFEL);
    assert!(state.shows_tooltip(KNAFEH));
    state.leave(KNAFEH);
    assert_eq!(state.tooltip_count(), 0);
}
