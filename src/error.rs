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

//! Error types for mesh construction, editing, queries and file I/O.

use std::path::PathBuf;

use thiserror::Error;

use crate::mesh::basic_types::TriangulationState;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("vertex index {vertex} out of range ({count} vertices)")]
    InvalidVertexIndex { vertex: usize, count: usize },

    #[error("face index {face} out of range ({count} faces)")]
    InvalidFaceIndex { face: usize, count: usize },

    #[error("local edge {edge} out of range (expected 0, 1 or 2)")]
    InvalidLocalEdge { edge: usize },

    #[error("vertex {vertex} is not a corner of face {face}")]
    VertexNotIncident { vertex: usize, face: usize },

    #[error("face {face} does not list face {neighbor} as a neighbor")]
    NotNeighbors { face: usize, neighbor: usize },

    #[error("asymmetric adjacency: face {face} slot {slot} points to face {neighbor} which does not point back")]
    AsymmetricNeighbor { face: usize, slot: usize, neighbor: usize },

    #[error("one-ring around vertex {vertex} did not close after {steps} steps")]
    BrokenRing { vertex: usize, steps: usize },

    #[error("operation requires state {expected:?}, mesh is {actual:?}")]
    WrongState {
        expected: TriangulationState,
        actual: TriangulationState,
    },

    #[error("need at least 3 points to seed a triangulation, got {0}")]
    NotEnoughPoints(usize),

    #[error("seed points are collinear")]
    DegenerateSeed,

    #[error("point ({x}, {y}) coincides with vertex {vertex}")]
    DuplicatePoint { vertex: usize, x: f64, y: f64 },

    #[error("point location did not terminate after {steps} steps")]
    LocationFailed { steps: usize },

    #[error("face {face} is infinite and cannot be {operation}")]
    InfiniteFace { face: usize, operation: &'static str },

    #[error("vertex {vertex} lies inside the circumcircle of face {face}")]
    DelaunayViolation { face: usize, vertex: usize },

    #[error("curvature is zero everywhere, cannot normalise")]
    FlatCurvature,

    #[error(
        "directed edge ({v0}, {v1}) appears in two faces: the surface is non-manifold or inconsistently oriented"
    )]
    NonManifoldEdge { v0: usize, v1: usize },

    #[error("edge ({v0}, {v1}) has only one incident face")]
    OpenBoundary { v0: usize, v1: usize },

    #[error("vertex {vertex} is not referenced by any face")]
    IsolatedVertex { vertex: usize },

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: Box<MeshError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl MeshError {
    pub fn invalid_param<V: std::fmt::Display>(
        name: &'static str,
        value: V,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        MeshError::Parse {
            line,
            message: message.into(),
        }
    }
}
