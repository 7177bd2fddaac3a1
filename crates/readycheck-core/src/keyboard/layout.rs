//! Virtual keyboard shown by the keyboard probe. Labels match the output of
//! [`normalize_key`](super::normalize_key) so a cap lights up when pressed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyWidth {
    Standard,
    Wide,
    Wider,
    Widest,
    Space,
}

impl KeyWidth {
    pub fn css_class(&self) -> &'static str {
        match self {
            KeyWidth::Standard => "key w-std",
            KeyWidth::Wide => "key w-wide",
            KeyWidth::Wider => "key w-wider",
            KeyWidth::Widest => "key w-widest",
            KeyWidth::Space => "key w-space",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCap {
    pub label: &'static str,
    pub width: KeyWidth,
    /// Grid cell (column, row) for caps laid out in a grid, e.g. the arrow cluster.
    pub cell: Option<(u8, u8)>,
}

const fn cap(label: &'static str) -> KeyCap {
    KeyCap {
        label,
        width: KeyWidth::Standard,
        cell: None,
    }
}

const fn wide(label: &'static str, width: KeyWidth) -> KeyCap {
    KeyCap {
        label,
        width,
        cell: None,
    }
}

const fn arrow(label: &'static str, column: u8, row: u8) -> KeyCap {
    KeyCap {
        label,
        width: KeyWidth::Standard,
        cell: Some((column, row)),
    }
}

#[rustfmt::skip]
pub const KEYBOARD_ROWS: &[&[KeyCap]] = &[
    &[
        cap("Esc"), cap("F1"), cap("F2"), cap("F3"), cap("F4"), cap("F5"), cap("F6"),
        cap("F7"), cap("F8"), cap("F9"), cap("F10"), cap("F11"), cap("F12"),
    ],
    &[
        cap("`"), cap("1"), cap("2"), cap("3"), cap("4"), cap("5"), cap("6"), cap("7"),
        cap("8"), cap("9"), cap("0"), cap("-"), cap("="),
        wide("Backspace", KeyWidth::Wider),
    ],
    &[
        wide("Tab", KeyWidth::Wide),
        cap("q"), cap("w"), cap("e"), cap("r"), cap("t"), cap("y"), cap("u"), cap("i"),
        cap("o"), cap("p"), cap("["), cap("]"),
        wide("\\", KeyWidth::Wide),
    ],
    &[
        wide("CapsLock", KeyWidth::Wider),
        cap("a"), cap("s"), cap("d"), cap("f"), cap("g"), cap("h"), cap("j"), cap("k"),
        cap("l"), cap(";"), cap("'"),
        wide("Enter", KeyWidth::Wider),
    ],
    &[
        wide("Shift", KeyWidth::Widest),
        cap("z"), cap("x"), cap("c"), cap("v"), cap("b"), cap("n"), cap("m"), cap(","),
        cap("."), cap("/"),
        wide("Shift", KeyWidth::Widest),
    ],
    &[
        wide("Ctrl", KeyWidth::Wide),
        wide("Win", KeyWidth::Wide),
        wide("Alt", KeyWidth::Wide),
        wide("Space", KeyWidth::Space),
        wide("Alt", KeyWidth::Wide),
        wide("Fn", KeyWidth::Wide),
        wide("Ctrl", KeyWidth::Wide),
    ],
];

pub const ARROW_KEYS: &[KeyCap] = &[
    arrow("↑", 1, 0),
    arrow("←", 0, 1),
    arrow("↓", 1, 1),
    arrow("→", 2, 1),
];
