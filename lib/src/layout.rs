//! Row assembly of glyph sequences.

/// Anything that can be written as one visible character cell
pub trait Glyph {
    fn push_to(&self, out: &mut String);
}

impl Glyph for char {
    fn push_to(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Glyph for String {
    fn push_to(&self, out: &mut String) {
        out.push_str(self);
    }
}

/// Chunk a flat glyph sequence into rows of `width` glyphs joined by `\n`
///
/// Rows are counted in glyphs, not bytes, so escape-wrapped glyphs lay out
/// exactly like plain ones. The last row may be short if the sequence does
/// not divide evenly. No trailing newline is emitted.
pub fn assemble_lines<G: Glyph>(glyphs: &[G], width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut output = String::with_capacity(glyphs.len() + glyphs.len() / width);
    for (row_idx, row) in glyphs.chunks(width).enumerate() {
        if row_idx > 0 {
            output.push('\n');
        }
        for glyph in row {
            glyph.push_to(&mut output);
        }
    }

    output
}
