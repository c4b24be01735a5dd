//! ITU-T X.25 checksum (CRC-16/MCRF4XX) as used by MAVLink.

/// Initial accumulator value.
pub const X25_INIT_CRC: u16 = 0xFFFF;

/// Residue left after accumulating the one's complement of a matching
/// checksum, low byte first.
pub const X25_VALIDATE_CRC: u16 = 0xF0B8;

/// Running X.25 checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc(u16);

impl Crc {
    pub const fn new() -> Self {
        Self(X25_INIT_CRC)
    }

    pub fn accumulate(&mut self, byte: u8) {
        let mut tmp = byte ^ (self.0 & 0xFF) as u8;
        tmp ^= tmp << 4;
        let tmp = u16::from(tmp);
        self.0 = (self.0 >> 8) ^ (tmp << 8) ^ (tmp << 3) ^ (tmp >> 4);
    }

    pub fn accumulate_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.accumulate(byte);
        }
    }

    pub const fn finish(self) -> u16 {
        self.0
    }

    /// Frame checksum: `header` (frame bytes 1..=5), then the payload, then
    /// the message's CRC-extra seed.
    pub fn checksum(header: &[u8], payload: &[u8], crc_extra: u8) -> u16 {
        let mut crc = Self::new();
        crc.accumulate_slice(header);
        crc.accumulate_slice(payload);
        crc.accumulate(crc_extra);
        crc.finish()
    }

    /// Quick check: feed the complemented checksum and compare the residue
    /// against [`X25_VALIDATE_CRC`].
    pub fn residue_matches(mut self, checksum: u16) -> bool {
        let [lo, hi] = (!checksum).to_le_bytes();
        self.accumulate(lo);
        self.accumulate(hi);
        self.0 == X25_VALIDATE_CRC
    }
}

impl Default for Crc {
    fn default() -> Self {
        Self::new()
    }
}
