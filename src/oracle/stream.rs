//! Lazy, memoizing term streams for continued fraction oracles.
//!
//! A [`TermStream`] owns a growable buffer of terms filled on demand from a
//! caller-supplied source; every [`TermCursor`] walks the stream at its own
//! position while sharing the memoized prefix, so cloning a cursor (or the
//! stream itself) never recomputes terms.

use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::Signed;
use parking_lot::Mutex;

/// Produces the terms of a continued fraction, one per index in order.
///
/// The first term (`index == 0`) may be any signed integer; every later term
/// must be strictly positive. Returning `None` ends the stream, which makes
/// the represented value rational.
pub trait TermSource: Send {
    fn next_term(&mut self, index: usize) -> Option<BigInt>;
}

impl<F> TermSource for F
where
    F: FnMut(usize) -> Option<BigInt> + Send,
{
    fn next_term(&mut self, index: usize) -> Option<BigInt> {
        self(index)
    }
}

struct StreamBuf {
    memo: Vec<BigInt>,
    source: Box<dyn TermSource>,
    finished: bool,
}

/// A restartable sequence of continued fraction terms.
///
/// Cloning shares the memoized prefix; the source is consulted at most once
/// per index no matter how many cursors exist.
#[derive(Clone)]
pub struct TermStream {
    buf: Arc<Mutex<StreamBuf>>,
}

impl TermStream {
    pub fn new(source: impl TermSource + 'static) -> Self {
        TermStream {
            buf: Arc::new(Mutex::new(StreamBuf {
                memo: Vec::new(),
                source: Box::new(source),
                finished: false,
            })),
        }
    }

    /// Build a stream from a term-producing closure.
    pub fn from_fn(f: impl FnMut(usize) -> Option<BigInt> + Send + 'static) -> Self {
        Self::new(f)
    }

    /// A stream with a finite prefix followed by a repeating tail, the shape
    /// of every quadratic surd (`repeating` empty gives a finite stream, i.e.
    /// a rational value).
    pub fn periodic(initial: Vec<i64>, repeating: Vec<u64>) -> Self {
        Self::from_fn(move |index| {
            if index < initial.len() {
                Some(BigInt::from(initial[index]))
            } else if repeating.is_empty() {
                None
            } else {
                Some(BigInt::from(repeating[(index - initial.len()) % repeating.len()]))
            }
        })
    }

    /// A fresh cursor at the first term.
    pub fn cursor(&self) -> TermCursor {
        TermCursor {
            stream: self.clone(),
            pos: 0,
        }
    }

    /// The term at `index`, filling the buffer up to it if needed.
    ///
    /// Panics if the source yields a non-positive term after the first one.
    fn get(&self, index: usize) -> Option<BigInt> {
        let mut buf = self.buf.lock();
        while buf.memo.len() <= index && !buf.finished {
            let at = buf.memo.len();
            match buf.source.next_term(at) {
                Some(term) => {
                    if at > 0 && !term.is_positive() {
                        panic!("continued fraction terms after the first must be positive");
                    }
                    buf.memo.push(term);
                }
                None => buf.finished = true,
            }
        }
        buf.memo.get(index).cloned()
    }
}

/// An independent position into a [`TermStream`]. Cloning keeps the shared
/// prefix and copies the position.
#[derive(Clone)]
pub struct TermCursor {
    stream: TermStream,
    pos: usize,
}

impl Iterator for TermCursor {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        let term = self.stream.get(self.pos);
        if term.is_some() {
            self.pos += 1;
        }
        term
    }
}
