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

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::info;

use crate::{
    error::{MeshError, Result},
    geometry::Point3,
    io::Tokens,
    numeric::scalar::Scalar,
};

/// Read a point count followed by that many `x y z` triples, each axis
/// multiplied by the matching entry of `scale`.
pub fn read_point_set<T: Scalar, P: AsRef<Path>>(path: P, scale: [f64; 3]) -> Result<Vec<Point3<T>>> {
    let path = path.as_ref();
    let load = || -> Result<Vec<Point3<T>>> {
        let file = File::open(path)?;
        read_point_set_from(BufReader::new(file), scale)
    };
    let points = load().map_err(|e| MeshError::Load {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    info!(path = %path.display(), points = points.len(), "point set loaded");
    Ok(points)
}

pub fn read_point_set_from<T: Scalar, R: BufRead>(
    reader: R,
    scale: [f64; 3],
) -> Result<Vec<Point3<T>>> {
    let mut toks = Tokens::read(reader)?;
    let n: usize = toks.parse("point count")?;

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x: f64 = toks.parse("x coordinate")?;
        let y: f64 = toks.parse("y coordinate")?;
        let z: f64 = toks.parse("z coordinate")?;
        points.push(Point3::from_vals([x * scale[0], y * scale[1], z * scale[2]]));
    }
    Ok(points)
}
