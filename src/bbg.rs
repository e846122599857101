//! Hierarchical identity-based encryption with wildcards from the Boneh-Boyen-Goh scheme.
//! * From: "[Hierarchical Identity Based Encryption with Constant Size Ciphertext](https://eprint.iacr.org/2005/015.pdf)"
//! * Wildcard ciphertexts as in: "[Identity-Based Encryption Gone Wild](https://eprint.iacr.org/2006/304.pdf)"
//!
//! Ciphertexts are addressed to a pattern of up to L identity scalars, any of
//! which may be a wildcard; a secret key decrypts when its identity vector
//! matches the pattern at every fixed position. Keys are delegated one level
//! at a time, starting from the level-zero master secret key produced by
//! setup.
//!
//! The scheme is IND-CPA secure only. Decryption with a non-matching key
//! yields an unrelated element of the target group rather than an error;
//! callers that need authenticated decryption must layer a tag on top.

use crate::pattern::{Params, Pattern, Slot};
use crate::util::*;
use crate::{Compress, Error};
use alloc::vec::Vec;
use arrayref::array_ref;
use byteorder::{ByteOrder, LittleEndian};
use irmaseal_curve::{
    multi_miller_loop, pairing, G1Affine, G2Affine, G2Prepared, G2Projective, Scalar,
};
use rand::{CryptoRng, Rng};
use subtle::Choice;

#[allow(unused_imports)]
use group::Group;

pub use irmaseal_curve::Gt;

/// A point on the paired curve that can be encrypted and decrypted.
///
/// You can use the byte representation to derive an AES key.
pub type Msg = Gt;

/// Public key parameters generated by the PKG used to encrypt messages.
///
/// Sized by the hierarchy bound fixed at setup: one basis element per level
/// plus the constant term.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicKey {
    g1: G1Affine,
    g2: G2Affine,
    h1: G1Affine,
    u: Vec<G2Affine>,
}

/// Secret key for an identity vector; the master secret key is the level-zero
/// case with an empty vector.
///
/// Carries one delegation component per remaining level, so the key shrinks
/// by one element every time it is delegated.
#[derive(Debug, Clone, PartialEq)]
pub struct SecretKey {
    ids: Vec<Scalar>,
    a0: G2Affine,
    b: Vec<G2Affine>,
    c: G1Affine,
}

/// Encrypted message, addressed to a pattern. Can only be decrypted with a
/// secret key whose identity vector matches that pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct CipherText {
    pattern: Pattern,
    c1: G1Affine,
    c2: G2Affine,
    c3: Gt,
    c4: Vec<G2Affine>,
}

impl PublicKey {
    /// The hierarchy bound these parameters were set up with.
    pub fn depth(&self) -> usize {
        self.u.len() - 1
    }
}

impl SecretKey {
    /// The level of this key: the length of its identity vector.
    pub fn level(&self) -> usize {
        self.ids.len()
    }

    /// The hierarchy bound this key was created under.
    pub fn depth(&self) -> usize {
        self.ids.len() + self.b.len()
    }
}

impl CipherText {
    /// The pattern this ciphertext was encrypted under.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// Folds an identity vector into the Boneh-Boyen hash u_0 * prod_i u_i^id_i.
fn entangle(pk: &PublicKey, ids: &[Scalar]) -> G2Projective {
    let mut ucoll: G2Projective = pk.u[0].into();
    for (ui, id) in pk.u[1..].iter().zip(ids) {
        ucoll += ui * id;
    }
    ucoll
}

/// The Boneh-Boyen-Goh wildcarded identity-based encryption scheme.
#[derive(Debug)]
pub struct BonehBoyenGoh;

impl BonehBoyenGoh {
    /// Generate a master key pair for hierarchies bounded by `params`.
    ///
    /// The returned secret key is the level-zero master secret key from which
    /// all user keys are delegated.
    pub fn setup<R: Rng + CryptoRng>(params: &Params, rng: &mut R) -> (PublicKey, SecretKey) {
        let depth = params.depth();

        let g1: G1Affine = rand_g1(rng).into();
        let g2: G2Affine = rand_g2(rng).into();

        let alpha = rand_scalar(rng);
        let h1: G1Affine = (g1 * alpha).into();

        let mut u = Vec::with_capacity(depth + 1);
        for _ in 0..=depth {
            u.push(rand_g2(rng).into());
        }

        let a0: G2Affine = (g2 * alpha).into();

        (
            PublicKey { g1, g2, h1, u },
            // The master secret key is a key with zero delegation randomness:
            // all of its delegation components are the group identity.
            SecretKey {
                ids: Vec::new(),
                a0,
                b: vec![G2Affine::identity(); depth],
                c: G1Affine::identity(),
            },
        )
    }

    /// Delegate `parent` one level deeper to the identity scalar `id`.
    ///
    /// The child carries the parent's identity vector extended by `id` and is
    /// distributed exactly as a key delegated directly from the master secret
    /// key.
    pub fn derive<R: Rng + CryptoRng>(
        pk: &PublicKey,
        parent: &SecretKey,
        id: &Scalar,
        rng: &mut R,
    ) -> Result<SecretKey, Error> {
        if parent.depth() != pk.depth() {
            return Err(Error::Params);
        }

        let level = parent.level();
        if level == parent.depth() {
            return Err(Error::Hierarchy);
        }

        let r = rand_scalar(rng);

        let mut ids = parent.ids.clone();
        ids.push(*id);

        // The first delegation component belongs to the child's own level and
        // is folded into a0. The remaining components keep their absolute
        // hierarchy position: the i-th slot of the child corresponds to basis
        // u_{level + 2 + i}, not to its array offset.
        let a0: G2Affine = (parent.a0 + parent.b[0] * id + entangle(pk, &ids) * r).into();

        let b: Vec<G2Affine> = parent.b[1..]
            .iter()
            .enumerate()
            .map(|(i, bj)| (bj + pk.u[level + 2 + i] * r).into())
            .collect();

        let c: G1Affine = (parent.c + pk.g1 * r).into();

        Ok(SecretKey { ids, a0, b, c })
    }

    /// Encrypt `m` under `pattern`. The pattern is consumed and travels with
    /// the returned ciphertext.
    pub fn encrypt<R: Rng + CryptoRng>(
        pk: &PublicKey,
        pattern: Pattern,
        m: &Msg,
        rng: &mut R,
    ) -> Result<CipherText, Error> {
        if pattern.is_empty() || pattern.len() > pk.depth() {
            return Err(Error::Pattern);
        }

        let s = rand_scalar(rng);

        let c1: G1Affine = (pk.g1 * s).into();

        // Fixed slots are folded into c2; every wildcard slot instead
        // publishes u_i^s so that a decryptor can fill in its own identity.
        let mut ucoll: G2Projective = pk.u[0].into();
        let mut c4 = Vec::with_capacity(pattern.wildcards());
        for (i, slot) in pattern.slots().iter().enumerate() {
            match slot {
                Slot::Wildcard => c4.push((pk.u[i + 1] * s).into()),
                Slot::Fixed(id) => ucoll += pk.u[i + 1] * id,
            }
        }
        let c2: G2Affine = (ucoll * s).into();

        let c3 = pairing(&pk.h1, &pk.g2) * s + m;

        Ok(CipherText {
            pattern,
            c1,
            c2,
            c3,
            c4,
        })
    }

    /// Decrypt `ct` with a secret key whose identity vector matches the
    /// ciphertext's pattern.
    ///
    /// The level of the key must equal the pattern length. No integrity check
    /// is performed: a key that does not match the pattern recovers an
    /// element unrelated to the encrypted message.
    pub fn decrypt(sk: &SecretKey, ct: &CipherText) -> Result<Msg, Error> {
        if sk.level() != ct.pattern.len() {
            return Err(Error::Pattern);
        }

        // Fill every wildcard position with the key's own identity scalar.
        let wild_ids = ct
            .pattern
            .slots()
            .iter()
            .zip(&sk.ids)
            .filter(|(slot, _)| matches!(slot, Slot::Wildcard))
            .map(|(_, id)| id);

        let mut c2: G2Projective = ct.c2.into();
        for (c4i, id) in ct.c4.iter().zip(wild_ids) {
            c2 += c4i * id;
        }

        let m = ct.c3
            + multi_miller_loop(&[
                (&sk.c, &G2Prepared::from(G2Affine::from(c2))),
                (&-ct.c1, &G2Prepared::from(sk.a0)),
            ])
            .final_exponentiation();

        Ok(m)
    }
}

impl Compress for PublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        let mut res =
            Vec::with_capacity(4 + 2 * G1_BYTES + G2_BYTES + self.u.len() * G2_BYTES);

        let mut depth = [0u8; 4];
        LittleEndian::write_u32(&mut depth, self.depth() as u32);
        res.extend_from_slice(&depth);

        res.extend_from_slice(&self.g1.to_compressed());
        res.extend_from_slice(&self.g2.to_compressed());
        res.extend_from_slice(&self.h1.to_compressed());
        for ui in &self.u {
            res.extend_from_slice(&ui.to_compressed());
        }

        res
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < 4 {
            return Err(Error::Params);
        }

        let depth = LittleEndian::read_u32(&bytes[..4]) as usize;
        if depth == 0 || bytes.len() != 4 + 2 * G1_BYTES + G2_BYTES + (depth + 1) * G2_BYTES {
            return Err(Error::Params);
        }

        let mut is_some = Choice::from(1u8);
        let mut at = 4;

        let mut g1 = G1Affine::default();
        is_some &= G1Affine::from_compressed(array_ref![bytes, at, G1_BYTES])
            .map(|p| g1 = p)
            .is_some();
        at += G1_BYTES;

        let mut g2 = G2Affine::default();
        is_some &= G2Affine::from_compressed(array_ref![bytes, at, G2_BYTES])
            .map(|p| g2 = p)
            .is_some();
        at += G2_BYTES;

        let mut h1 = G1Affine::default();
        is_some &= G1Affine::from_compressed(array_ref![bytes, at, G1_BYTES])
            .map(|p| h1 = p)
            .is_some();
        at += G1_BYTES;

        let mut u = vec![G2Affine::default(); depth + 1];
        for ui in u.iter_mut() {
            is_some &= G2Affine::from_compressed(array_ref![bytes, at, G2_BYTES])
                .map(|p| *ui = p)
                .is_some();
            at += G2_BYTES;
        }

        if bool::from(is_some) {
            Ok(PublicKey { g1, g2, h1, u })
        } else {
            Err(Error::Params)
        }
    }
}

impl Compress for SecretKey {
    fn to_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(
            8 + self.ids.len() * SCALAR_BYTES + (self.b.len() + 1) * G2_BYTES + G1_BYTES,
        );

        let mut head = [0u8; 8];
        LittleEndian::write_u32(&mut head[..4], self.depth() as u32);
        LittleEndian::write_u32(&mut head[4..], self.level() as u32);
        res.extend_from_slice(&head);

        for id in &self.ids {
            res.extend_from_slice(&id.to_bytes());
        }
        res.extend_from_slice(&self.a0.to_compressed());
        for bj in &self.b {
            res.extend_from_slice(&bj.to_compressed());
        }
        res.extend_from_slice(&self.c.to_compressed());

        res
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < 8 {
            return Err(Error::Params);
        }

        let depth = LittleEndian::read_u32(&bytes[..4]) as usize;
        let level = LittleEndian::read_u32(&bytes[4..8]) as usize;
        if depth == 0
            || level > depth
            || bytes.len() != 8 + level * SCALAR_BYTES + (depth - level + 1) * G2_BYTES + G1_BYTES
        {
            return Err(Error::Params);
        }

        let mut is_some = Choice::from(1u8);
        let mut at = 8;

        let mut ids = vec![Scalar::default(); level];
        for id in ids.iter_mut() {
            is_some &= Scalar::from_bytes(array_ref![bytes, at, SCALAR_BYTES])
                .map(|s| *id = s)
                .is_some();
            at += SCALAR_BYTES;
        }

        let mut a0 = G2Affine::default();
        is_some &= G2Affine::from_compressed(array_ref![bytes, at, G2_BYTES])
            .map(|p| a0 = p)
            .is_some();
        at += G2_BYTES;

        let mut b = vec![G2Affine::default(); depth - level];
        for bj in b.iter_mut() {
            is_some &= G2Affine::from_compressed(array_ref![bytes, at, G2_BYTES])
                .map(|p| *bj = p)
                .is_some();
            at += G2_BYTES;
        }

        let mut c = G1Affine::default();
        is_some &= G1Affine::from_compressed(array_ref![bytes, at, G1_BYTES])
            .map(|p| c = p)
            .is_some();

        if bool::from(is_some) {
            Ok(SecretKey { ids, a0, b, c })
        } else {
            Err(Error::Params)
        }
    }
}

impl Compress for CipherText {
    fn to_bytes(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(
            4 + self.pattern.len() * (1 + SCALAR_BYTES)
                + G1_BYTES
                + G2_BYTES
                + GT_BYTES
                + self.c4.len() * G2_BYTES,
        );

        self.pattern.write_bytes(&mut res);
        res.extend_from_slice(&self.c1.to_compressed());
        res.extend_from_slice(&self.c2.to_compressed());
        res.extend_from_slice(&self.c3.to_compressed());
        for c4i in &self.c4 {
            res.extend_from_slice(&c4i.to_compressed());
        }

        res
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (pattern, mut at) = Pattern::read_bytes(bytes)?;

        if bytes.len() != at + G1_BYTES + G2_BYTES + GT_BYTES + pattern.wildcards() * G2_BYTES {
            return Err(Error::Params);
        }

        let mut is_some = Choice::from(1u8);

        let mut c1 = G1Affine::default();
        is_some &= G1Affine::from_compressed(array_ref![bytes, at, G1_BYTES])
            .map(|p| c1 = p)
            .is_some();
        at += G1_BYTES;

        let mut c2 = G2Affine::default();
        is_some &= G2Affine::from_compressed(array_ref![bytes, at, G2_BYTES])
            .map(|p| c2 = p)
            .is_some();
        at += G2_BYTES;

        let mut c3 = Gt::identity();
        is_some &= Gt::from_compressed(array_ref![bytes, at, GT_BYTES])
            .map(|x| c3 = x)
            .is_some();
        at += GT_BYTES;

        let mut c4 = vec![G2Affine::default(); pattern.wildcards()];
        for c4i in c4.iter_mut() {
            is_some &= G2Affine::from_compressed(array_ref![bytes, at, G2_BYTES])
                .map(|p| *c4i = p)
                .is_some();
            at += G2_BYTES;
        }

        if bool::from(is_some) {
            Ok(CipherText {
                pattern,
                c1,
                c2,
                c3,
                c4,
            })
        } else {
            Err(Error::Params)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Derive;

    fn system<R: Rng + CryptoRng>(depth: usize, rng: &mut R) -> (PublicKey, SecretKey) {
        let params = Params::new(depth).unwrap();
        BonehBoyenGoh::setup(&params, rng)
    }

    fn chain<R: Rng + CryptoRng>(
        pk: &PublicKey,
        msk: &SecretKey,
        ids: &[Scalar],
        rng: &mut R,
    ) -> SecretKey {
        let mut sk = msk.clone();
        for id in ids {
            sk = BonehBoyenGoh::derive(pk, &sk, id, rng).unwrap();
        }
        sk
    }

    fn fixed(ids: &[Scalar]) -> Pattern {
        Pattern::from(ids.iter().map(|id| Slot::Fixed(*id)).collect::<Vec<_>>())
    }

    fn rand_ids<R: Rng + CryptoRng>(len: usize, rng: &mut R) -> Vec<Scalar> {
        (0..len).map(|_| rand_scalar(rng)).collect()
    }

    fn exact_identities(depth: usize) {
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(depth, &mut rng);
        let ids = rand_ids(depth, &mut rng);
        let sk = chain(&pk, &msk, &ids, &mut rng);

        let m = rand_gt(&mut rng);
        let ct = BonehBoyenGoh::encrypt(&pk, fixed(&ids), &m, &mut rng).unwrap();

        assert_eq!(BonehBoyenGoh::decrypt(&sk, &ct).unwrap(), m);
    }

    fn serialize_artifacts(depth: usize) {
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(depth, &mut rng);
        let ids = rand_ids(depth, &mut rng);
        let sk = chain(&pk, &msk, &ids, &mut rng);

        let mut slots: Vec<Slot> = ids.iter().map(|id| Slot::Fixed(*id)).collect();
        slots[0] = Slot::Wildcard;
        let pattern = Pattern::from(slots);

        let m = rand_gt(&mut rng);
        let ct = BonehBoyenGoh::encrypt(&pk, pattern.clone(), &m, &mut rng).unwrap();

        assert_eq!(PublicKey::from_bytes(&pk.to_bytes()).unwrap(), pk);
        assert_eq!(SecretKey::from_bytes(&msk.to_bytes()).unwrap(), msk);
        assert_eq!(SecretKey::from_bytes(&sk.to_bytes()).unwrap(), sk);
        assert_eq!(Pattern::from_bytes(&pattern.to_bytes()).unwrap(), pattern);
        assert_eq!(CipherText::from_bytes(&ct.to_bytes()).unwrap(), ct);
        assert_eq!(Msg::from_bytes(&m.to_bytes()).unwrap(), m);
    }

    test_bbg_at_depth!(1, 2, 3, 5);

    #[test]
    fn eq_encrypt_decrypt_below_bound() {
        // A level-2 key under a depth-3 hierarchy decrypts length-2 patterns.
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(3, &mut rng);
        let ids = rand_ids(2, &mut rng);
        let sk = chain(&pk, &msk, &ids, &mut rng);

        let m = rand_gt(&mut rng);
        let ct = BonehBoyenGoh::encrypt(&pk, fixed(&ids), &m, &mut rng).unwrap();

        assert_eq!(BonehBoyenGoh::decrypt(&sk, &ct).unwrap(), m);
    }

    #[test]
    fn eq_decrypt_every_wildcard_subset() {
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(3, &mut rng);
        let ids = rand_ids(3, &mut rng);
        let sk = chain(&pk, &msk, &ids, &mut rng);

        for mask in 0..8u32 {
            let slots: Vec<Slot> = ids
                .iter()
                .enumerate()
                .map(|(i, id)| {
                    if mask & (1 << i) != 0 {
                        Slot::Wildcard
                    } else {
                        Slot::Fixed(*id)
                    }
                })
                .collect();

            let m = rand_gt(&mut rng);
            let ct = BonehBoyenGoh::encrypt(&pk, Pattern::from(slots), &m, &mut rng).unwrap();

            assert_eq!(BonehBoyenGoh::decrypt(&sk, &ct).unwrap(), m);
        }
    }

    #[test]
    fn eq_decrypt_wildcard_hides_disagreement() {
        // Keys may differ arbitrarily at wildcard positions.
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(2, &mut rng);
        let shared = rand_scalar(&mut rng);

        let sk = chain(&pk, &msk, &[rand_scalar(&mut rng), shared], &mut rng);

        let m = rand_gt(&mut rng);
        let pattern = Pattern::from(vec![Slot::Wildcard, Slot::Fixed(shared)]);
        let ct = BonehBoyenGoh::encrypt(&pk, pattern, &m, &mut rng).unwrap();

        assert_eq!(BonehBoyenGoh::decrypt(&sk, &ct).unwrap(), m);
    }

    #[test]
    fn ne_decrypt_fixed_mismatch() {
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(2, &mut rng);
        let ids = rand_ids(2, &mut rng);
        let sk = chain(&pk, &msk, &ids, &mut rng);

        let mut other = ids.clone();
        other[0] = rand_scalar(&mut rng);

        let m = rand_gt(&mut rng);
        let ct = BonehBoyenGoh::encrypt(&pk, fixed(&other), &m, &mut rng).unwrap();

        assert!(!ct.pattern().matches(&ids));
        assert_ne!(BonehBoyenGoh::decrypt(&sk, &ct).unwrap(), m);
    }

    #[test]
    fn eq_delegation_chains_agree() {
        // Two independently delegated keys for the same identity vector
        // decrypt the same ciphertext to the same message.
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(3, &mut rng);
        let ids = rand_ids(3, &mut rng);

        let sk1 = chain(&pk, &msk, &ids, &mut rng);
        let mid = chain(&pk, &msk, &ids[..2], &mut rng);
        let sk2 = BonehBoyenGoh::derive(&pk, &mid, &ids[2], &mut rng).unwrap();

        let m = rand_gt(&mut rng);
        let ct = BonehBoyenGoh::encrypt(&pk, fixed(&ids), &m, &mut rng).unwrap();

        assert_ne!(sk1, sk2);
        assert_eq!(BonehBoyenGoh::decrypt(&sk1, &ct).unwrap(), m);
        assert_eq!(BonehBoyenGoh::decrypt(&sk2, &ct).unwrap(), m);
    }

    #[test]
    fn levels_grow_by_one() {
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(4, &mut rng);
        assert_eq!(msk.level(), 0);

        let mut sk = msk;
        for expected in 1..=4 {
            sk = BonehBoyenGoh::derive(&pk, &sk, &rand_scalar(&mut rng), &mut rng).unwrap();
            assert_eq!(sk.level(), expected);
            assert_eq!(sk.depth(), 4);
        }
    }

    #[test]
    fn err_derive_past_bound() {
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(2, &mut rng);
        let sk = chain(&pk, &msk, &rand_ids(2, &mut rng), &mut rng);

        assert_eq!(
            BonehBoyenGoh::derive(&pk, &sk, &rand_scalar(&mut rng), &mut rng),
            Err(Error::Hierarchy)
        );
    }

    #[test]
    fn err_derive_foreign_public_key() {
        let mut rng = rand::thread_rng();
        let (_, msk) = system(2, &mut rng);
        let (pk3, _) = system(3, &mut rng);

        assert_eq!(
            BonehBoyenGoh::derive(&pk3, &msk, &rand_scalar(&mut rng), &mut rng),
            Err(Error::Params)
        );
    }

    #[test]
    fn err_encrypt_pattern_out_of_bounds() {
        let mut rng = rand::thread_rng();
        let (pk, _) = system(2, &mut rng);
        let m = rand_gt(&mut rng);

        assert_eq!(
            BonehBoyenGoh::encrypt(&pk, Pattern::from(vec![]), &m, &mut rng),
            Err(Error::Pattern)
        );
        assert_eq!(
            BonehBoyenGoh::encrypt(&pk, fixed(&rand_ids(3, &mut rng)), &m, &mut rng),
            Err(Error::Pattern)
        );
    }

    #[test]
    fn err_decrypt_level_mismatch() {
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(2, &mut rng);
        let sk = chain(&pk, &msk, &rand_ids(1, &mut rng), &mut rng);

        let m = rand_gt(&mut rng);
        let ct = BonehBoyenGoh::encrypt(&pk, fixed(&rand_ids(2, &mut rng)), &m, &mut rng).unwrap();

        assert_eq!(BonehBoyenGoh::decrypt(&sk, &ct), Err(Error::Pattern));
    }

    #[test]
    fn err_zero_hierarchy_bound() {
        assert_eq!(Params::new(0), Err(Error::Hierarchy));
    }

    #[test]
    fn two_level_user_matrix() {
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(2, &mut rng);

        let zero = Scalar::zero();
        let users: Vec<(Scalar, SecretKey)> = (0..4u64)
            .map(|i| {
                let id = Scalar::from(i);
                (id, chain(&pk, &msk, &[id, zero], &mut rng))
            })
            .collect();

        let m = rand_gt(&mut rng);

        // Pattern [i, 0]: only user i recovers m.
        for (id, _) in &users {
            let ct = BonehBoyenGoh::encrypt(&pk, fixed(&[*id, zero]), &m, &mut rng).unwrap();
            for (other, sk) in &users {
                let dec = BonehBoyenGoh::decrypt(sk, &ct).unwrap();
                if other == id {
                    assert_eq!(dec, m);
                } else {
                    assert_ne!(dec, m);
                }
            }
        }

        // Patterns [*, 0] and [*, *]: every user recovers m.
        for slots in vec![
            vec![Slot::Wildcard, Slot::Fixed(zero)],
            vec![Slot::Wildcard, Slot::Wildcard],
        ] {
            let ct = BonehBoyenGoh::encrypt(&pk, Pattern::from(slots), &m, &mut rng).unwrap();
            for (_, sk) in &users {
                assert_eq!(BonehBoyenGoh::decrypt(sk, &ct).unwrap(), m);
            }
        }

        // Distinct messages under [*, *] stay distinct.
        let m2 = rand_gt(&mut rng);
        let wild = Pattern::from(vec![Slot::Wildcard, Slot::Wildcard]);
        let ct1 = BonehBoyenGoh::encrypt(&pk, wild.clone(), &m, &mut rng).unwrap();
        let ct2 = BonehBoyenGoh::encrypt(&pk, wild, &m2, &mut rng).unwrap();
        for (_, sk) in &users {
            assert_eq!(BonehBoyenGoh::decrypt(sk, &ct1).unwrap(), m);
            assert_eq!(BonehBoyenGoh::decrypt(sk, &ct2).unwrap(), m2);
        }
    }

    #[test]
    fn setups_are_independent() {
        let mut rng = rand::thread_rng();
        let (pk1, _) = system(2, &mut rng);
        let (pk2, _) = system(2, &mut rng);

        assert_ne!(pk1.g1, pk2.g1);
    }

    #[test]
    fn derived_identities_round_trip() {
        let mut rng = rand::thread_rng();
        let (pk, msk) = system(2, &mut rng);

        let dept = crate::Identity::derive(b"finance").to_scalar();
        let user = crate::Identity::derive_str("email:w.geraedts@sarif.nl").to_scalar();
        let sk = chain(&pk, &msk, &[dept, user], &mut rng);

        let m = rand_gt(&mut rng);
        let pattern = Pattern::from(vec![Slot::Fixed(dept), Slot::Wildcard]);
        let ct = BonehBoyenGoh::encrypt(&pk, pattern, &m, &mut rng).unwrap();

        assert_eq!(BonehBoyenGoh::decrypt(&sk, &ct).unwrap(), m);
    }

    #[test]
    fn reject_mangled_bytes() {
        let mut rng = rand::thread_rng();
        let (pk, _) = system(2, &mut rng);

        let mut bytes = pk.to_bytes();
        bytes.truncate(bytes.len() - 1);
        assert_eq!(PublicKey::from_bytes(&bytes), Err(Error::Params));

        assert_eq!(SecretKey::from_bytes(&[]), Err(Error::Params));
        // Length two, but the second slot carries an unknown tag.
        assert_eq!(Pattern::from_bytes(&[2, 0, 0, 0, 0, 7]), Err(Error::Params));
    }
}
