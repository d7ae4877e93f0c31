//! Ring buffer of the most recent frames.
use crate::{error::WrapError, Element};
use anyhow::Result;
use ndarray::{ArrayD, IxDyn};

/// Fixed-capacity history of the last `n_stack` frames.
///
/// Frames are stored back to back in a single flat buffer. `cursor` is the slot of
/// the oldest frame, which is also the slot overwritten by the next push.
#[derive(Debug)]
pub(super) struct FrameHistory<T> {
    buf: Vec<T>,
    frame_shape: Vec<usize>,
    frame_len: usize,
    n_stack: usize,
    cursor: usize,
}

impl<T: Element> FrameHistory<T> {
    /// Creates a history with all slots holding zero-valued frames.
    pub fn new(n_stack: usize, frame_shape: &[usize]) -> Self {
        let frame_len = frame_shape.iter().product();
        Self {
            buf: vec![T::zero(); n_stack * frame_len],
            frame_shape: frame_shape.to_vec(),
            frame_len,
            n_stack,
            cursor: 0,
        }
    }

    fn check_shape(&self, frame: &ArrayD<T>) -> Result<(), WrapError> {
        if frame.shape() != self.frame_shape.as_slice() {
            return Err(WrapError::ShapeMismatch {
                expected: self.frame_shape.clone(),
                actual: frame.shape().to_vec(),
            });
        }
        Ok(())
    }

    fn write_slot(&mut self, slot: usize, frame: &ArrayD<T>) {
        let start = slot * self.frame_len;
        let dst = &mut self.buf[start..start + self.frame_len];
        for (d, s) in dst.iter_mut().zip(frame.iter()) {
            *d = *s;
        }
    }

    /// Writes `frame` into every slot, as at the beginning of an episode.
    pub fn fill(&mut self, frame: &ArrayD<T>) -> Result<(), WrapError> {
        self.check_shape(frame)?;
        for slot in 0..self.n_stack {
            self.write_slot(slot, frame);
        }
        self.cursor = 0;
        Ok(())
    }

    /// Appends `frame`, evicting the oldest one.
    pub fn push(&mut self, frame: &ArrayD<T>) -> Result<(), WrapError> {
        self.check_shape(frame)?;
        self.write_slot(self.cursor, frame);
        self.cursor = (self.cursor + 1) % self.n_stack;
        Ok(())
    }

    /// Returns the frames stacked along a new leading axis, oldest first.
    pub fn stacked(&self) -> Result<ArrayD<T>> {
        let split = self.cursor * self.frame_len;
        let mut data = Vec::with_capacity(self.buf.len());
        data.extend_from_slice(&self.buf[split..]);
        data.extend_from_slice(&self.buf[..split]);

        let mut shape = Vec::with_capacity(self.frame_shape.len() + 1);
        shape.push(self.n_stack);
        shape.extend_from_slice(&self.frame_shape);
        Ok(ArrayD::from_shape_vec(IxDyn(&shape), data)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::{arr1, arr2};

    fn frame(v: &[i32]) -> ArrayD<i32> {
        arr1(v).into_dyn()
    }

    #[test]
    fn test_zeros_before_fill() -> Result<()> {
        let history = FrameHistory::<i32>::new(2, &[3]);
        assert_eq!(history.stacked()?, arr2(&[[0, 0, 0], [0, 0, 0]]).into_dyn());
        Ok(())
    }

    #[test]
    fn test_ring_order() -> Result<()> {
        let mut history = FrameHistory::new(3, &[2]);
        history.fill(&frame(&[1, 1]))?;
        history.push(&frame(&[2, 2]))?;
        assert_eq!(
            history.stacked()?,
            arr2(&[[1, 1], [1, 1], [2, 2]]).into_dyn()
        );

        // Wraps around twice
        for i in 3..9 {
            history.push(&frame(&[i, i]))?;
        }
        assert_eq!(
            history.stacked()?,
            arr2(&[[6, 6], [7, 7], [8, 8]]).into_dyn()
        );

        // Fill resets the order as well as the contents
        history.fill(&frame(&[0, 1]))?;
        history.push(&frame(&[2, 3]))?;
        assert_eq!(
            history.stacked()?,
            arr2(&[[0, 1], [0, 1], [2, 3]]).into_dyn()
        );
        Ok(())
    }

    #[test]
    fn test_single_slot() -> Result<()> {
        let mut history = FrameHistory::new(1, &[2]);
        history.fill(&frame(&[1, 2]))?;
        history.push(&frame(&[3, 4]))?;
        assert_eq!(history.stacked()?, arr2(&[[3, 4]]).into_dyn());
        Ok(())
    }

    #[test]
    fn test_shape_mismatch() {
        let mut history = FrameHistory::new(2, &[2]);
        let err = history.push(&frame(&[1, 2, 3])).unwrap_err();
        assert_eq!(
            err,
            WrapError::ShapeMismatch {
                expected: vec![2],
                actual: vec![3]
            }
        );
    }

    #[test]
    fn test_multi_dim_frames() -> Result<()> {
        let mut history = FrameHistory::new(2, &[2, 2]);
        history.fill(&arr2(&[[1, 2], [3, 4]]).into_dyn())?;
        history.push(&arr2(&[[5, 6], [7, 8]]).into_dyn())?;
        let stacked = history.stacked()?;
        assert_eq!(stacked.shape(), &[2, 2, 2]);
        assert_eq!(
            stacked.iter().cloned().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6, 7, 8]
        );
        Ok(())
    }
}
