/// Greedy word wrap at a fixed column.
///
/// Scans left to right with a running column count that resets after every
/// newline; the first space at or beyond `width` becomes a newline. Words are
/// never split, so a single unbroken word may overshoot the column. Applied
/// once when a popup is created, the displayed text is fixed thereafter.
pub fn wrap(message: &str, width: usize) -> String {
    let mut wrapped = String::with_capacity(message.len());
    let mut column = 0;

    for c in message.chars() {
        if c == '\n' {
            column = 0;
        } else if c == ' ' && column >= width {
            wrapped.push('\n');
            column = 0;
            continue;
        } else {
            column += 1;
        }
        wrapped.push(c);
    }

    wrapped
}
