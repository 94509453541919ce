// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Plain-text mesh and point-set formats.

pub mod obj;
pub mod off;
pub mod points;

pub use obj::{write_obj, write_obj_to};
pub use off::{read_off, read_off_from, write_off, write_off_to};
pub use points::{read_point_set, read_point_set_from};

use std::io::BufRead;
use std::str::FromStr;

use crate::error::{MeshError, Result};

/// Whitespace-separated tokens with their 1-based line numbers. `#` starts a
/// comment that runs to the end of the line.
pub(crate) struct Tokens {
    tokens: Vec<(usize, String)>,
    pos: usize,
    line: usize,
}

impl Tokens {
    pub(crate) fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut tokens = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let content = line.split('#').next().unwrap_or("");
            tokens.extend(content.split_whitespace().map(|t| (i + 1, t.to_string())));
        }
        Ok(Self { tokens, pos: 0, line: 0 })
    }

    pub(crate) fn next_token(&mut self, what: &str) -> Result<(usize, &str)> {
        match self.tokens.get(self.pos) {
            Some((line, tok)) => {
                self.pos += 1;
                self.line = *line;
                Ok((*line, tok.as_str()))
            }
            None => Err(MeshError::parse(
                self.line,
                format!("unexpected end of input, expected {what}"),
            )),
        }
    }

    pub(crate) fn parse<F: FromStr>(&mut self, what: &str) -> Result<F> {
        let (line, tok) = self.next_token(what)?;
        tok.parse()
            .map_err(|_| MeshError::parse(line, format!("invalid {what} '{tok}'")))
    }

    /// Line of the last token handed out.
    pub(crate) fn line(&self) -> usize {
        self.line
    }
}
