//! Plain-text portable pixmap (`P3`) encoding.
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <channel values of row 0>
//! ...
//! ```
//!
//! Channel values are packed greedily onto lines of at most 70 characters.
//! A value is never split across lines, and every pixel row starts on a new
//! line.

use crate::canvas::Canvas;
use crate::error::Result;
use log::debug;

pub const MAX_LINE_WIDTH: usize = 70;
pub const MAX_CHANNEL_VALUE: u8 = u8::MAX;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PpmEncoder {
    line_width: usize,
}

impl Default for PpmEncoder {
    fn default() -> Self {
        PpmEncoder {
            line_width: MAX_LINE_WIDTH,
        }
    }
}

impl PpmEncoder {
    /// # Panics
    /// Panics if `line_width` cannot hold a three-digit value.
    pub fn with_line_width(line_width: usize) -> Self {
        assert!(
            line_width >= 3,
            "line width {line_width} cannot hold a channel value"
        );
        PpmEncoder { line_width }
    }

    #[inline]
    pub fn line_width(&self) -> usize {
        self.line_width
    }

    pub fn encode(&self, canvas: &Canvas) -> String {
        debug!(
            "encoding {}x{} canvas as P3 with {} character lines",
            canvas.width(),
            canvas.height(),
            self.line_width
        );

        let mut out = format!(
            "P3\n{} {}\n{}\n",
            canvas.width(),
            canvas.height(),
            MAX_CHANNEL_VALUE
        );

        for row in canvas.rows() {
            let mut line = LinePacker::new(&mut out, self.line_width);
            for channel in row.iter().flat_map(|color| color.to_rgb8()) {
                line.push(channel);
            }
            line.finish();
        }

        out
    }

    pub fn write<W: std::io::Write>(&self, canvas: &Canvas, mut writer: W) -> Result<()> {
        writer.write_all(self.encode(canvas).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

struct LinePacker<'a> {
    out: &'a mut String,
    line_width: usize,
    line_len: usize,
}

impl<'a> LinePacker<'a> {
    fn new(out: &'a mut String, line_width: usize) -> Self {
        LinePacker {
            out,
            line_width,
            line_len: 0,
        }
    }

    fn push(&mut self, value: u8) {
        let token = value.to_string();
        if self.line_len > 0 {
            if self.line_len + 1 + token.len() > self.line_width {
                self.out.push('\n');
                self.line_len = 0;
            } else {
                self.out.push(' ');
                self.line_len += 1;
            }
        }
        self.out.push_str(&token);
        self.line_len += token.len();
    }

    fn finish(self) {
        self.out.push('\n');
    }
}
