use super::*;

fn ins(offset: usize, text: &str) -> Change {
	Change::insert(offset, text.as_bytes().to_vec())
}

fn del(offset: usize, text: &str) -> Change {
	Change::delete(offset, text.as_bytes().to_vec())
}

#[test]
fn kind_inverse_is_symmetric() {
	assert_eq!(ChangeKind::Insert.inverse(), ChangeKind::Delete);
	assert_eq!(ChangeKind::Delete.inverse(), ChangeKind::Insert);
	assert_eq!(ChangeKind::Insert.inverse().inverse(), ChangeKind::Insert);
}

#[test]
fn inverted_keeps_offset_and_content() {
	let change = ins(3, "abc");
	let inverse = change.inverted();
	assert_eq!(inverse, del(3, "abc"));
	assert_eq!(inverse.inverted(), change);
	assert_eq!(change.len(), 3);
	assert_eq!(change.end(), 6);
}

#[test]
fn empty_history_fails() {
	let mut history = History::new();
	assert!(!history.can_undo());
	assert!(!history.can_redo());
	assert_eq!(history.undo(), Err(TextError::NothingToUndo));
	assert_eq!(history.redo(), Err(TextError::NothingToRedo));
}

#[test]
fn undo_returns_inverse_and_keeps_original() {
	let mut history = History::new();
	history.record(ins(0, "hello"));

	let undo = history.undo().unwrap();
	assert_eq!(undo, del(0, "hello"));
	assert_eq!(history.recall(), &[ins(0, "hello")]);
	assert_eq!(history.undo_len(), 0);
	assert_eq!(history.redo_len(), 1);
}

#[test]
fn redo_returns_original() {
	let mut history = History::new();
	history.record(del(2, "xy"));
	history.undo().unwrap();

	let redo = history.redo().unwrap();
	assert_eq!(redo, del(2, "xy"));
	assert_eq!(history.done(), &[del(2, "xy")]);
	assert!(!history.can_redo());
}

#[test]
fn stacks_are_lifo() {
	let mut history = History::new();
	history.record(ins(0, "a"));
	history.record(ins(1, "b"));
	history.record(del(0, "a"));

	assert_eq!(history.undo().unwrap(), ins(0, "a"));
	assert_eq!(history.undo().unwrap(), del(1, "b"));
	assert_eq!(history.redo().unwrap(), ins(1, "b"));
	assert_eq!(history.undo().unwrap(), del(1, "b"));
	assert_eq!(history.undo().unwrap(), del(0, "a"));
	assert_eq!(history.undo(), Err(TextError::NothingToUndo));
	assert_eq!(history.redo_len(), 3);
}

#[test]
fn record_clears_recall() {
	let mut history = History::new();
	history.record(ins(0, "a"));
	history.record(ins(1, "b"));
	history.undo().unwrap();
	assert!(history.can_redo());

	history.record(ins(1, "c"));
	assert!(!history.can_redo());
	assert_eq!(history.redo(), Err(TextError::NothingToRedo));
	assert_eq!(history.done(), &[ins(0, "a"), ins(1, "c")]);
}

#[test]
fn repeated_cycles_are_stable() {
	let mut history = History::new();
	history.record(ins(0, "abc"));

	for _ in 0..5 {
		assert_eq!(history.undo().unwrap(), del(0, "abc"));
		assert_eq!(history.redo().unwrap(), ins(0, "abc"));
	}
	assert_eq!(history.done(), &[ins(0, "abc")]);
	assert!(history.recall().is_empty());
}

#[test]
fn peek_does_not_move_changes() {
	let mut history = History::new();
	assert_eq!(history.peek_undo(), None);
	assert_eq!(history.peek_redo(), None);

	history.record(ins(0, "ab"));
	assert_eq!(history.peek_undo(), Some(del(0, "ab")));
	assert_eq!(history.undo_len(), 1);

	history.undo().unwrap();
	assert_eq!(history.peek_redo(), Some(&ins(0, "ab")));
	assert_eq!(history.redo_len(), 1);
	assert_eq!(history.peek_undo(), None);
}

#[test]
fn clear_empties_both_stacks() {
	let mut history = History::new();
	history.record(ins(0, "a"));
	history.record(ins(1, "b"));
	history.undo().unwrap();

	history.clear();
	assert!(!history.can_undo());
	assert!(!history.can_redo());
}
