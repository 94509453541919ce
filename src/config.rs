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

//! Per-mesh knobs: when to run the expensive checks, which heat-diffusion
//! semantics to use, and how long a point-location walk may get.

/// When `integrity_check` and `delaunay_check` run during insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPolicy {
    Never,
    /// Once at the end of `insert_many`.
    AfterBatch,
    /// After every single insertion. Quadratic, meant for tests.
    AfterEachInsertion,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ValidationPolicy::AfterBatch
        } else {
            ValidationPolicy::Never
        }
    }
}

/// How one explicit-Euler heat diffusion sweep reads neighbor values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffusionScheme {
    /// Update `values` in place in ascending vertex order, so a vertex sees
    /// neighbors already updated earlier in the same sweep.
    #[default]
    InPlace,
    /// Every vertex reads the values from before the sweep.
    Synchronous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshConfig {
    pub validation: ValidationPolicy,
    pub diffusion: DiffusionScheme,
    /// Upper bound on faces visited by one location walk; `None` derives it
    /// from the current face count.
    pub max_walk_steps: Option<usize>,
}

impl MeshConfig {
    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_diffusion(mut self, diffusion: DiffusionScheme) -> Self {
        self.diffusion = diffusion;
        self
    }

    pub fn with_max_walk_steps(mut self, steps: usize) -> Self {
        self.max_walk_steps = Some(steps);
        self
    }

    pub(crate) fn walk_budget(&self, face_count: usize) -> usize {
        self.max_walk_steps.unwrap_or(2 * face_count + 16)
    }
}
