//! Helpers shared by the unit tests.

/// Random source that returns the same word forever.
///
/// `ConstRng(u64::MAX)` makes every `random::<f64>()` draw land just below
/// `1.0`, which forces the exploit branch of the epsilon policies.
/// `ConstRng(0)` draws `0.0` and forces exploration.
pub struct ConstRng(pub u64);

impl rand::RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for (i, byte) in dst.iter_mut().enumerate() {
            *byte = bytes[i % 8];
        }
    }
}
