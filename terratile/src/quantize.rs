//! Height quantization and tile payload encoding.
//!
//! Heights are linearly rescaled so that `min_height` maps to 0 and
//! `min_height + 600` to 65536, then truncated to unsigned 16 bits with
//! standard two's-complement wraparound. Values outside the 600 m range
//! are **not** clamped; `min_height + 600` itself wraps to 0. This is
//! deliberate, documented behavior of the tile format.

/// Height range in meters covered by the full u16 span.
pub const HEIGHT_RANGE_M: f64 = 600.0;

/// Quantize one height value against the configured floor.
///
/// Pure transform: `round((value - min_height) / 600 * 65536)` reduced
/// modulo 2^16. NaN inputs encode through the same cast (to 0) without
/// any special-casing.
pub fn quantize(value: f64, min_height: f64) -> u16 {
    let scaled = ((value - min_height) / HEIGHT_RANGE_M * 65536.0).round();
    scaled as i64 as u16
}

/// Encode one tile's evaluated grid into its output payload.
///
/// `values` is in natural (x, y) axis order (`a * resolution + b` =
/// value at `(x_a, y_b)`). The payload stores the grid transposed and
/// flattened row-major: y varies over rows, x within a row.
pub fn encode_tile(values: &[f64], resolution: usize, min_height: f64) -> Vec<u16> {
    debug_assert_eq!(values.len(), resolution * resolution);
    let mut out = Vec::with_capacity(values.len());
    for b in 0..resolution {
        for a in 0..resolution {
            out.push(quantize(values[a * resolution + b], min_height));
        }
    }
    out
}

/// Raw little-endian bytes of an encoded payload: the on-disk format,
/// no header, no compression.
pub fn payload_bytes(encoded: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(encoded.len() * 2);
    for v in encoded {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes
}
