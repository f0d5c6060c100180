//! Encoded-polyline codec for street geometries.
//!
//! The corpus stores geometries in the standard delta/varint polyline text
//! format at a fixed precision. Decoding happens inside the augmentation
//! driver; encoding is only needed when building corpus files.

use anyhow::{bail, Result};
use geo::Coord;

/// Fractional decimal digits carried by corpus geometries.
pub const PRECISION: u32 = 6;

/// Decode an encoded polyline into `(lon, lat)` coordinates.
///
/// Fails on truncated input or bytes outside the printable varint alphabet.
/// Consecutive duplicate vertices are *not* removed here; callers dedupe
/// with [`crate::geom::dedupe`] before measuring anything.
pub fn decode(encoded: &str, precision: u32) -> Result<Vec<Coord<f64>>> {
    let factor = 10f64.powi(precision as i32);
    let bytes = encoded.as_bytes();

    let mut coords = Vec::new();
    let mut idx = 0;
    let mut lat = 0i64;
    let mut lon = 0i64;
    while idx < bytes.len() {
        let (dlat, next) = decode_value(bytes, idx)?;
        let (dlon, next) = decode_value(bytes, next)?;
        lat += dlat;
        lon += dlon;
        idx = next;
        coords.push(Coord { x: lon as f64 / factor, y: lat as f64 / factor });
    }
    Ok(coords)
}

/// Encode `(lon, lat)` coordinates as a polyline string.
pub fn encode(coords: &[Coord<f64>], precision: u32) -> String {
    let factor = 10f64.powi(precision as i32);

    let mut out = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;
    for coord in coords {
        let lat = (coord.y * factor).round() as i64;
        let lon = (coord.x * factor).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lon - prev_lon, &mut out);
        prev_lat = lat;
        prev_lon = lon;
    }
    out
}

/// Read one zigzag-encoded varint starting at `idx`; returns the value and
/// the index just past it.
fn decode_value(bytes: &[u8], mut idx: usize) -> Result<(i64, usize)> {
    let mut accum = 0i64;
    let mut shift = 0u32;
    loop {
        let Some(&byte) = bytes.get(idx) else {
            bail!("truncated polyline at byte {idx}");
        };
        if !(63..=126).contains(&byte) {
            bail!("invalid polyline byte 0x{byte:02x} at {idx}");
        }
        let chunk = (byte - 63) as i64;
        accum |= (chunk & 0x1f) << shift;
        shift += 5;
        idx += 1;
        if chunk < 0x20 {
            break;
        }
    }
    let value = if accum & 1 == 1 { !(accum >> 1) } else { accum >> 1 };
    Ok((value, idx))
}

fn encode_value(value: i64, out: &mut String) {
    let mut accum = if value < 0 { !(value << 1) } else { value << 1 };
    while accum >= 0x20 {
        out.push((((accum & 0x1f) | 0x20) as u8 + 63) as char);
        accum >>= 5;
    }
    out.push((accum as u8 + 63) as char);
}
