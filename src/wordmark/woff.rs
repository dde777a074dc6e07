//! Unwrapping WOFF 1.0 fonts into plain sfnt (TrueType/OpenType) data.
//!
//! A WOFF file is an sfnt whose tables were individually zlib-compressed and
//! moved behind a different header. Rebuilding the sfnt means inflating each
//! table and writing a fresh offset table in front of the data. Checksums are
//! carried over from the WOFF directory as is.

use thiserror::Error;

const WOFF_SIGNATURE: &[u8; 4] = b"wOFF";
const WOFF2_SIGNATURE: &[u8; 4] = b"wOF2";
const WOFF_HEADER_LEN: usize = 44;
const WOFF_ENTRY_LEN: usize = 20;
const SFNT_HEADER_LEN: usize = 12;
const SFNT_RECORD_LEN: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WoffError {
    #[error("WOFF data is truncated")]
    Truncated,
    #[error("WOFF2 fonts are not supported, convert the font to TTF or WOFF")]
    Woff2,
    #[error("table `{0}` could not be decompressed")]
    Decompress(String),
    #[error("table `{tag}` is {actual} bytes, expected {expected}")]
    LengthMismatch {
        tag: String,
        expected: usize,
        actual: usize,
    },
}

/// An sfnt table with its tag and checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub tag: [u8; 4],
    pub checksum: u32,
    pub data: Vec<u8>,
}

pub fn is_woff(bytes: &[u8]) -> bool {
    bytes.starts_with(WOFF_SIGNATURE) || bytes.starts_with(WOFF2_SIGNATURE)
}

fn u16_at(bytes: &[u8], offset: usize) -> Result<u16, WoffError> {
    bytes
        .get(offset..offset + 2)
        .and_then(|b| <[u8; 2]>::try_from(b).ok())
        .map(u16::from_be_bytes)
        .ok_or(WoffError::Truncated)
}

fn u32_at(bytes: &[u8], offset: usize) -> Result<u32, WoffError> {
    bytes
        .get(offset..offset + 4)
        .and_then(|b| <[u8; 4]>::try_from(b).ok())
        .map(u32::from_be_bytes)
        .ok_or(WoffError::Truncated)
}

fn tag_name(tag: &[u8; 4]) -> String {
    String::from_utf8_lossy(tag).into_owned()
}

/// Rebuild the sfnt wrapped by a WOFF file.
pub fn to_sfnt(woff: &[u8]) -> Result<Vec<u8>, WoffError> {
    if woff.starts_with(WOFF2_SIGNATURE) {
        return Err(WoffError::Woff2);
    }
    if woff.len() < WOFF_HEADER_LEN {
        return Err(WoffError::Truncated);
    }
    let flavor = u32_at(woff, 4)?;
    let num_tables = u16_at(woff, 12)? as usize;

    let mut tables = Vec::with_capacity(num_tables);
    for i in 0..num_tables {
        let entry = WOFF_HEADER_LEN + i * WOFF_ENTRY_LEN;
        let tag = u32_at(woff, entry)?.to_be_bytes();
        let offset = u32_at(woff, entry + 4)? as usize;
        let comp_length = u32_at(woff, entry + 8)? as usize;
        let orig_length = u32_at(woff, entry + 12)? as usize;
        let checksum = u32_at(woff, entry + 16)?;

        let stored = woff
            .get(offset..offset + comp_length)
            .ok_or(WoffError::Truncated)?;
        let data = if comp_length < orig_length {
            miniz_oxide::inflate::decompress_to_vec_zlib(stored)
                .map_err(|_| WoffError::Decompress(tag_name(&tag)))?
        } else {
            stored.to_vec()
        };
        if data.len() != orig_length {
            return Err(WoffError::LengthMismatch {
                tag: tag_name(&tag),
                expected: orig_length,
                actual: data.len(),
            });
        }
        tables.push(Table {
            tag,
            checksum,
            data,
        });
    }

    log::debug!("unwrapped WOFF font with {num_tables} tables");
    Ok(write_sfnt(flavor, &tables))
}

/// Lay out `tables` as an sfnt, each table padded to four bytes.
pub fn write_sfnt(flavor: u32, tables: &[Table]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let mut search_range: u16 = 1;
    let mut entry_selector: u16 = 0;
    while search_range * 2 <= num_tables {
        search_range *= 2;
        entry_selector += 1;
    }
    let search_range = search_range * 16;
    let range_shift = (num_tables * 16).saturating_sub(search_range);

    let mut sfnt = Vec::new();
    sfnt.extend_from_slice(&flavor.to_be_bytes());
    sfnt.extend_from_slice(&num_tables.to_be_bytes());
    sfnt.extend_from_slice(&search_range.to_be_bytes());
    sfnt.extend_from_slice(&entry_selector.to_be_bytes());
    sfnt.extend_from_slice(&range_shift.to_be_bytes());

    let mut offset = SFNT_HEADER_LEN + tables.len() * SFNT_RECORD_LEN;
    for table in tables {
        sfnt.extend_from_slice(&table.tag);
        sfnt.extend_from_slice(&table.checksum.to_be_bytes());
        sfnt.extend_from_slice(&(offset as u32).to_be_bytes());
        sfnt.extend_from_slice(&(table.data.len() as u32).to_be_bytes());
        offset += padded(table.data.len());
    }
    for table in tables {
        sfnt.extend_from_slice(&table.data);
        sfnt.resize(sfnt.len() + padded(table.data.len()) - table.data.len(), 0);
    }
    sfnt
}

fn padded(len: usize) -> usize {
    (len + 3) & !3
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn table(tag: &[u8; 4], data: &[u8]) -> Table {
        Table {
            tag: *tag,
            checksum: 0x1234_5678,
            data: data.to_vec(),
        }
    }

    /// Wrap `tables` in a WOFF container, compressing those that shrink.
    pub(crate) fn wrap_woff(flavor: u32, tables: &[Table]) -> Vec<u8> {
        let stored: Vec<Vec<u8>> = tables
            .iter()
            .map(|t| {
                let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&t.data, 6);
                if compressed.len() < t.data.len() {
                    compressed
                } else {
                    t.data.clone()
                }
            })
            .collect();

        let mut woff = Vec::new();
        woff.extend_from_slice(WOFF_SIGNATURE);
        woff.extend_from_slice(&flavor.to_be_bytes());
        woff.extend_from_slice(&0u32.to_be_bytes()); // length, unchecked
        woff.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        woff.resize(WOFF_HEADER_LEN, 0);

        let mut offset = WOFF_HEADER_LEN + tables.len() * WOFF_ENTRY_LEN;
        for (t, data) in tables.iter().zip(stored.iter()) {
            woff.extend_from_slice(&t.tag);
            woff.extend_from_slice(&(offset as u32).to_be_bytes());
            woff.extend_from_slice(&(data.len() as u32).to_be_bytes());
            woff.extend_from_slice(&(t.data.len() as u32).to_be_bytes());
            woff.extend_from_slice(&t.checksum.to_be_bytes());
            offset += padded(data.len());
        }
        for data in stored.iter() {
            woff.extend_from_slice(data);
            woff.resize(woff.len() + padded(data.len()) - data.len(), 0);
        }
        woff
    }

    #[test]
    fn can_unwrap_woff_tables() {
        let tables = vec![
            table(b"cmap", &[7u8; 3]),
            table(b"glyf", &[0u8; 400]),
            table(b"head", b"head table"),
        ];
        let woff = wrap_woff(0x0001_0000, &tables);
        assert!(is_woff(&woff));

        let sfnt = to_sfnt(&woff).expect("can unwrap woff");
        assert_eq!(sfnt, write_sfnt(0x0001_0000, &tables));

        // offset table
        assert_eq!(u32_at(&sfnt, 0), Ok(0x0001_0000));
        assert_eq!(u16_at(&sfnt, 4), Ok(3));
        assert_eq!(u16_at(&sfnt, 6), Ok(32));
        assert_eq!(u16_at(&sfnt, 8), Ok(1));
        assert_eq!(u16_at(&sfnt, 10), Ok(16));

        // the compressed glyf table comes back at its padded offset
        let glyf = SFNT_HEADER_LEN + SFNT_RECORD_LEN;
        assert_eq!(&sfnt[glyf..glyf + 4], b"glyf");
        let offset = u32_at(&sfnt, glyf + 8).expect("has offset") as usize;
        assert_eq!(offset, SFNT_HEADER_LEN + 3 * SFNT_RECORD_LEN + 4);
        assert_eq!(u32_at(&sfnt, glyf + 12), Ok(400));
        assert_eq!(&sfnt[offset..offset + 400], &[0u8; 400][..]);
    }

    #[test]
    fn rejects_broken_woff() {
        let woff = wrap_woff(0x0001_0000, &[table(b"glyf", &[0u8; 400])]);
        assert_eq!(to_sfnt(&woff[..WOFF_HEADER_LEN + 8]), Err(WoffError::Truncated));
        assert_eq!(to_sfnt(&woff[..woff.len() - 4]), Err(WoffError::Truncated));

        let mut lying = woff.clone();
        // claim a longer original length than the table inflates to
        let orig_length = WOFF_HEADER_LEN + 12;
        lying[orig_length..orig_length + 4].copy_from_slice(&401u32.to_be_bytes());
        assert!(matches!(
            to_sfnt(&lying),
            Err(WoffError::LengthMismatch { expected: 401, actual: 400, .. })
        ));
    }

    #[test]
    fn rejects_woff2() {
        let mut woff2 = b"wOF2".to_vec();
        woff2.resize(64, 0);
        assert!(is_woff(&woff2));
        assert_eq!(to_sfnt(&woff2), Err(WoffError::Woff2));
        assert!(!is_woff(&[0, 1, 0, 0]));
    }
}
