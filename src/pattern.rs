//! Patterns are identity vectors in which any position may be replaced by a
//! wildcard, interpreted under a system-wide hierarchy bound.

use crate::util::SCALAR_BYTES;
use crate::{Compress, Error};
use alloc::vec::Vec;
use arrayref::array_ref;
use byteorder::{ByteOrder, LittleEndian};
use irmaseal_curve::Scalar;

/// System-wide parameters: the maximum hierarchy depth and pattern length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    depth: usize,
}

impl Params {
    /// Fixes the hierarchy bound. A bound of zero is rejected.
    pub fn new(depth: usize) -> Result<Self, Error> {
        if depth == 0 {
            return Err(Error::Hierarchy);
        }

        Ok(Params { depth })
    }

    /// The maximum hierarchy depth and pattern length.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// One position of a pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// Matches any identity at this position.
    Wildcard,
    /// Matches exactly this identity scalar.
    Fixed(Scalar),
}

/// An identity vector in which any position may be replaced by a wildcard.
///
/// A pattern is consumed by encryption and travels inside the ciphertext it
/// was encrypted under.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern(Vec<Slot>);

impl From<Vec<Slot>> for Pattern {
    fn from(slots: Vec<Slot>) -> Self {
        Pattern(slots)
    }
}

impl Pattern {
    /// The number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pattern has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The slots, in hierarchy order.
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// The number of wildcard slots.
    pub fn wildcards(&self) -> usize {
        self.0
            .iter()
            .filter(|slot| matches!(slot, Slot::Wildcard))
            .count()
    }

    /// Whether an identity vector matches this pattern: it must have the same
    /// length and agree with the pattern at every fixed position.
    pub fn matches(&self, ids: &[Scalar]) -> bool {
        self.0.len() == ids.len()
            && self.0.iter().zip(ids).all(|(slot, id)| match slot {
                Slot::Wildcard => true,
                Slot::Fixed(fixed) => fixed == id,
            })
    }

    pub(crate) fn write_bytes(&self, res: &mut Vec<u8>) {
        let mut len = [0u8; 4];
        LittleEndian::write_u32(&mut len, self.0.len() as u32);
        res.extend_from_slice(&len);

        for slot in &self.0 {
            match slot {
                Slot::Wildcard => res.push(0),
                Slot::Fixed(id) => {
                    res.push(1);
                    res.extend_from_slice(&id.to_bytes());
                }
            }
        }
    }

    /// Parses a pattern from the front of `bytes`, also returning the number
    /// of bytes consumed.
    pub(crate) fn read_bytes(bytes: &[u8]) -> Result<(Self, usize), Error> {
        if bytes.len() < 4 {
            return Err(Error::Params);
        }

        let len = LittleEndian::read_u32(&bytes[..4]) as usize;
        // Every slot takes at least one byte; this bounds allocations on
        // mangled input.
        if len > bytes.len() {
            return Err(Error::Params);
        }

        let mut slots = Vec::with_capacity(len);
        let mut at = 4;

        for _ in 0..len {
            match bytes.get(at) {
                Some(0) => {
                    slots.push(Slot::Wildcard);
                    at += 1;
                }
                Some(1) => {
                    if bytes.len() < at + 1 + SCALAR_BYTES {
                        return Err(Error::Params);
                    }
                    let id = Option::from(Scalar::from_bytes(array_ref![bytes, at + 1, SCALAR_BYTES]))
                        .ok_or(Error::Params)?;
                    slots.push(Slot::Fixed(id));
                    at += 1 + SCALAR_BYTES;
                }
                _ => return Err(Error::Params),
            }
        }

        Ok((Pattern(slots), at))
    }
}

impl Compress for Pattern {
    fn to_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(4 + self.0.len() * (1 + SCALAR_BYTES));
        self.write_bytes(&mut res);
        res
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (pattern, at) = Pattern::read_bytes(bytes)?;
        if at != bytes.len() {
            return Err(Error::Params);
        }

        Ok(pattern)
    }
}
