use crate::foundation::error::{WorkspaceError, WorkspaceResult};

/// A layer's timing window: `in_point < out_point`, both inclusive frame indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LayerSpan {
    pub in_point: i64,
    pub out_point: i64,
}

impl LayerSpan {
    pub fn new(in_point: i64, out_point: i64) -> WorkspaceResult<Self> {
        if in_point >= out_point {
            return Err(WorkspaceError::validation(
                "LayerSpan in_point must be < out_point",
            ));
        }
        Ok(Self {
            in_point,
            out_point,
        })
    }

    pub fn duration(self) -> i64 {
        self.out_point - self.in_point
    }

    pub fn contains(self, frame: i64) -> bool {
        self.in_point <= frame && frame <= self.out_point
    }

    /// Checks the span against a composition of `frame_count` frames.
    pub fn validate_within(self, frame_count: i64) -> WorkspaceResult<()> {
        if self.in_point >= self.out_point {
            return Err(WorkspaceError::validation(
                "LayerSpan in_point must be < out_point",
            ));
        }
        if self.in_point < 0 || self.out_point > frame_count - 1 {
            return Err(WorkspaceError::validation(format!(
                "LayerSpan [{}, {}] outside [0, {}]",
                self.in_point,
                self.out_point,
                frame_count - 1
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/span.rs"]
mod tests;
