//! Reader for the flat-text tensor format.

use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::api::error::{TensorIoError, TensorIoResult};
use ndtensor_core::{Scalar, Shape, Tensor};

/// Walks whitespace-delimited tokens, failing loudly when input runs dry.
struct TokenCursor<'a> {
    tokens: SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> TokenCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
            consumed: 0,
        }
    }

    /// Parse the next token, attributing failures to `section`.
    ///
    /// `expected` and `found` describe the section's token counts so a
    /// truncation error can say how much was missing.
    fn parse<N: FromStr>(
        &mut self,
        section: &'static str,
        expected: usize,
        found: usize,
    ) -> TensorIoResult<N> {
        let token = match self.tokens.next() {
            Some(t) => t,
            None => {
                return Err(TensorIoError::Truncated {
                    section,
                    expected,
                    found,
                })
            }
        };
        self.consumed += 1;
        token.parse::<N>().map_err(|_| TensorIoError::InvalidToken {
            section,
            token: token.to_string(),
            position: self.consumed,
        })
    }
}

/// Parse a tensor from flat-text data.
///
/// Pure function over the input string; see the crate docs for the
/// layout. Tokens past the declared element count are ignored.
pub fn decode_tensor<T: Scalar>(text: &str) -> TensorIoResult<Tensor<T>> {
    let mut cursor = TokenCursor::new(text);

    let rank: usize = cursor.parse("rank", 1, 0)?;

    let mut dims = Vec::with_capacity(rank);
    for i in 0..rank {
        dims.push(cursor.parse::<usize>("shape", rank, i)?);
    }

    let shape = Shape::new(dims);
    let numel = match shape.checked_numel() {
        Some(n) => n,
        None => {
            return Err(TensorIoError::Oversized {
                shape: shape.dims().to_vec(),
            })
        }
    };

    let mut data = Vec::with_capacity(numel);
    for i in 0..numel {
        data.push(cursor.parse::<T>("element", numel, i)?);
    }

    Ok(Tensor::from_vec(data, shape)?)
}

/// Read a tensor from a file.
///
/// The file not being readable is an [`TensorIoError::Io`] error;
/// malformed content is reported by [`decode_tensor`]. No partial tensor
/// is ever returned.
pub fn read_tensor<T: Scalar, P: AsRef<Path>>(path: P) -> TensorIoResult<Tensor<T>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let tensor = decode_tensor(&text)?;
    log::debug!(
        "read tensor rank={} shape={:?} from {}",
        tensor.rank(),
        tensor.shape(),
        path.display()
    );
    Ok(tensor)
}
