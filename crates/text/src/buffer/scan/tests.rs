use super::*;

#[test]
fn word_scans() {
	let mut buffer = Buffer::with_text("abc def");
	assert_eq!(buffer.next_word(0), 3);
	assert_eq!(buffer.cursor(), 3);
	assert_eq!(buffer.prev_word(7), 3);
	assert_eq!(buffer.cursor(), 4);
	assert_eq!(buffer.next_word(1), 2);
	assert_eq!(buffer.prev_word(2), 2);
}

#[test]
fn word_scans_stop_at_non_word() {
	let mut buffer = Buffer::with_text("abc def");
	assert_eq!(buffer.next_word(3), 0);
	assert_eq!(buffer.prev_word(4), 0);
	assert_eq!(buffer.prev_word(0), 0);
	assert_eq!(buffer.next_word(7), 0);
	assert_eq!(buffer.next_word(100), 0);
}

#[test]
fn prev_scans_ignore_rune_at_offset() {
	let mut buffer = Buffer::with_text("ab cd");
	assert_eq!(buffer.prev_word(2), 2);
	assert_eq!(buffer.prev_word(3), 0);
	assert_eq!(buffer.prev_space(2), 2);
	assert_eq!(buffer.prev_space(3), 0);
}

#[test]
fn word_scans_count_bytes() {
	let mut buffer = Buffer::with_text("über_42x");
	assert_eq!(buffer.next_word(0), 5);
	assert_eq!(buffer.prev_word(5), 5);
	assert_eq!(buffer.next_word(6), 3);
	assert_eq!(buffer.prev_word(9), 3);
}

#[test]
fn space_scans() {
	let mut buffer = Buffer::with_text("foo.bar baz\tqux");
	assert_eq!(buffer.next_space(0), 7);
	assert_eq!(buffer.prev_space(7), 7);
	assert_eq!(buffer.next_space(8), 3);
	assert_eq!(buffer.prev_space(11), 3);
	assert_eq!(buffer.next_space(12), 3);
	assert_eq!(buffer.next_space(7), 0);
	assert_eq!(buffer.prev_space(8), 0);
}

#[test]
fn delim_scans() {
	let mut buffer = Buffer::with_text("one\ntwo\nthree");
	assert_eq!(buffer.next_delim('\n', 0), Ok(3));
	assert_eq!(buffer.cursor(), 3);
	assert_eq!(buffer.next_delim('\n', 3), Ok(0));
	assert_eq!(buffer.next_delim('\n', 4), Ok(3));
	assert_eq!(buffer.next_delim('\n', 8), Ok(5));
	assert_eq!(buffer.next_delim('\n', 13), Ok(0));

	assert_eq!(buffer.prev_delim('\n', 13), Ok(6));
	assert_eq!(buffer.cursor(), 7);
	assert_eq!(buffer.prev_delim('\n', 7), Ok(4));
	assert_eq!(buffer.prev_delim('\n', 3), Ok(3));
	assert_eq!(buffer.prev_delim('\n', 0), Ok(0));
}

#[test]
fn delim_scans_multibyte() {
	let mut buffer = Buffer::with_text("α→β→γ");
	assert_eq!(buffer.next_delim('→', 0), Ok(2));
	assert_eq!(buffer.prev_delim('→', 12), Ok(5));
	assert_eq!(buffer.prev_delim('→', 10), Ok(3));
}

#[test]
fn select_word_around_offset() {
	let mut buffer = Buffer::with_text("hello brave world");
	assert_eq!(buffer.select(8), (6, 11));
	assert_eq!(buffer.read_dot(), "brave");
	assert_eq!(buffer.select(0), (0, 5));
	assert_eq!(buffer.select(17), (12, 17));
}

#[test]
fn select_falls_back_to_single_rune() {
	let mut buffer = Buffer::with_text("a + é");
	assert_eq!(buffer.select(2), (2, 3));
	assert_eq!(buffer.read_dot(), "+");

	let mut buffer = Buffer::with_text("  ");
	assert_eq!(buffer.select(1), (1, 2));
	assert_eq!(buffer.select(2), (2, 2));
}

#[test]
fn select_anchors_inside_rune() {
	let mut buffer = Buffer::with_text("x → y");
	assert_eq!(buffer.select(3), (2, 5));
	assert_eq!(buffer.read_dot(), "→");
}
