/// Identifier for a particle in a [`crate::field::ParticleField`].
///
/// This is an index into `ParticleField::particles`, and is only
/// meaningful within the lifetime of a given field instance.
pub type ParticleId = usize;
