//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Military Grid Reference System encoding

use crate::error::GridError;
use crate::projection::{ll_to_utm, ProjectedPoint};

/// Highest supported precision (1 m)
pub const MAX_ACCURACY: u8 = 5;

const SET_ORIGIN_COLUMN_LETTERS: &[u8] = b"AJSAJS";
const SET_ORIGIN_ROW_LETTERS: &[u8] = b"AFAFAF";

const A: u8 = b'A';
const I: u8 = b'I';
const O: u8 = b'O';
const V: u8 = b'V';
const Z: u8 = b'Z';

/// MGRS reference of a geodetic position with `accuracy` digit pairs
/// (0: 100 km square, 5: 1 m).
pub fn ll_to_mgrs(lat: f64, lon: f64, accuracy: u8) -> Result<String, GridError> {
    let utm = ll_to_utm(lat, lon)?;
    Ok(encode(&utm, accuracy))
}

/// Grid zone designator, e.g. `32T`
pub fn grid_zone_designator(pt: &ProjectedPoint) -> String {
    format!("{}{}", pt.zone_number, pt.zone_letter)
}

/// MGRS reference of a UTM point
pub fn encode(pt: &ProjectedPoint, accuracy: u8) -> String {
    let accuracy = accuracy.min(MAX_ACCURACY) as usize;
    let easting = pt.easting.trunc().max(0.0) as u64;
    let northing = pt.northing.trunc().max(0.0) as u64;
    let seasting = format!("{:05}", easting % 100000);
    let snorthing = format!("{:05}", northing % 100000);
    format!(
        "{}{}{}{}",
        grid_zone_designator(pt),
        hundred_k_id(easting, northing, pt.zone_number),
        &seasting[..accuracy],
        &snorthing[..accuracy]
    )
}

/// Letter set (1..=6) of a zone
fn hundred_k_set(zone: u8) -> usize {
    match zone as usize % 6 {
        0 => 6,
        set => set,
    }
}

/// Two letter 100 km square identifier
pub fn hundred_k_id(easting: u64, northing: u64, zone: u8) -> String {
    let set = hundred_k_set(zone);
    let column = (easting / 100000) as u8;
    let row = ((northing / 100000) % 20) as u8;
    letter_100k_id(column, row, set)
}

fn letter_100k_id(column: u8, row: u8, set: usize) -> String {
    let col_origin = SET_ORIGIN_COLUMN_LETTERS[set - 1];
    let row_origin = SET_ORIGIN_ROW_LETTERS[set - 1];

    // column letters start at 1
    let mut col = col_origin as i32 + column as i32 - 1;
    let mut row = row_origin as i32 + row as i32;

    let mut rollover = false;
    if col > Z as i32 {
        col = col - Z as i32 + A as i32 - 1;
        rollover = true;
    }
    col = skip_io(col, col_origin, rollover);
    if col > Z as i32 {
        col = col - Z as i32 + A as i32 - 1;
    }

    let rollover = if row > V as i32 {
        row = row - V as i32 + A as i32 - 1;
        true
    } else {
        false
    };
    row = skip_io(row, row_origin, rollover);
    if row > V as i32 {
        row = row - V as i32 + A as i32 - 1;
    }

    format!("{}{}", col as u8 as char, row as u8 as char)
}

/// Letters I and O are not used
fn skip_io(mut letter: i32, origin: u8, rollover: bool) -> i32 {
    let (i, o, origin) = (I as i32, O as i32, origin as i32);
    if letter == i || (origin < i && letter > i) || ((letter > i || origin < i) && rollover) {
        letter += 1;
    }
    if letter == o || (origin < o && letter > o) || ((letter > o || origin < o) && rollover) {
        letter += 1;
        if letter == i {
            letter += 1;
        }
    }
    letter
}
