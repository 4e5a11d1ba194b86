use console::{style, StyledObject};

// region:       -- Icons (unicode symbols on LHS of output)

pub fn icon_res() -> StyledObject<&'static str> {
    style("➤").color256(45)
}

// endregion:    -- Icons

// region:       -- Text Output (for printing)

pub fn txt_res(text: String) -> StyledObject<String> {
    style(text).bright()
}

/// Wrap `text` to the terminal width (capped for readability).
pub fn wrap_to_term(text: &str) -> String {
    let (_, cols) = console::Term::stdout().size();
    let width = usize::from(cols).clamp(40, 100);
    textwrap::fill(text, width)
}

// endregion:    -- Text Output
