use anyhow::Result;
use derive_more::Deref;
use std::io::{self, Read};
use std::mem;

#[derive(Deref, Clone, Copy)]
pub struct DatumBodyLen(u32);
impl DatumBodyLen {
    pub fn new_manual(len: u32) -> Self {
        Self(len)
    }
    pub fn from_dynalen_body(buf: &[u8]) -> Result<Self> {
        let int = u32::try_from(buf.len())?;
        Ok(Self(int))
    }
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let (r_len, int) = deser_u32(r)?;
        Ok((r_len, Self(int)))
    }
}

#[derive(Deref, Clone, Copy)]
pub struct MembersCount(u32);
impl MembersCount {
    pub fn from_len(len: usize) -> Result<Self> {
        let membs_ct = u32::try_from(len)?;
        Ok(Self(membs_ct))
    }
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let (r_len, int) = deser_u32(r)?;
        Ok((r_len, Self(int)))
    }
}

fn deser_u32(r: &mut impl Read) -> Result<(usize, u32), io::Error> {
    let mut buf = [0u8; mem::size_of::<u32>()];
    r.read_exact(&mut buf)?;
    Ok((buf.len(), u32::from_le_bytes(buf)))
}
