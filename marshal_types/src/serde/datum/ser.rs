use crate::serde::{Datum, DatumBodyLen, DatumType, DatumTypeInt, MembersCount, Record};
use anyhow::{anyhow, Result};
use derive_more::Deref;
use std::io::Write;
use std::mem;

#[derive(Deref, Debug)]
pub struct WriteLen(usize);

impl Datum {
    pub fn ser(&self, w: &mut impl Write, max_depth: usize) -> Result<WriteLen> {
        let mut w_len = WriteLen(0);
        self.ser_(w, max_depth, 0, &mut w_len)?;
        Ok(w_len)
    }

    pub fn ser_solo(&self, max_depth: usize) -> Result<Vec<u8>> {
        let mut buf = vec![];
        self.ser(&mut buf, max_depth)?;
        Ok(buf)
    }

    fn ser_(
        &self,
        w: &mut impl Write,
        max_depth: usize,
        depth: usize,
        w_len: &mut WriteLen,
    ) -> Result<()> {
        check_depth(max_depth, depth)?;

        /* datum_type */
        let dtype = DatumType::from(self);
        let dtype = DatumTypeInt::from(dtype);
        put(w, &dtype.to_le_bytes(), w_len)?;

        /* datum_body_len */
        let dbody_len = match self {
            Datum::Null | Datum::Bool(_) | Datum::I64(_) | Datum::F64(_) => None,
            Datum::Bytes(b) => Some(DatumBodyLen::from_dynalen_body(b)?),
            Datum::Str(s) => Some(DatumBodyLen::from_dynalen_body(s.as_bytes())?),
            Datum::Seq(_) | Datum::Record(_) => {
                let len = self.body_len(max_depth, depth)?;
                Some(DatumBodyLen::new_manual(u32::try_from(len)?))
            }
        };
        if let Some(dbody_len) = dbody_len {
            put(w, &dbody_len.to_le_bytes(), w_len)?;
        }

        /* datum_body */
        match self {
            Datum::Null => {}
            Datum::Bool(b) => put(w, &[u8::from(*b)], w_len)?,
            Datum::I64(i) => put(w, &i.to_le_bytes(), w_len)?,
            Datum::F64(f) => put(w, &f.to_le_bytes(), w_len)?,
            Datum::Bytes(b) => put(w, b, w_len)?,
            Datum::Str(s) => put(w, s.as_bytes(), w_len)?,
            Datum::Seq(members) => {
                /* members_count */
                let membs_ct = MembersCount::from_len(members.len())?;
                put(w, &membs_ct.to_le_bytes(), w_len)?;

                /* members */
                for member in members {
                    member.ser_(w, max_depth, depth + 1, w_len)?;
                }
            }
            Datum::Record(Record { name, fields }) => {
                /* name */
                ser_name(w, name, w_len)?;

                /* members_count */
                let membs_ct = MembersCount::from_len(fields.len())?;
                put(w, &membs_ct.to_le_bytes(), w_len)?;

                /* members */
                for field in fields {
                    ser_name(w, &field.name, w_len)?;
                    field.value.ser_(w, max_depth, depth + 1, w_len)?;
                }
            }
        }

        Ok(())
    }

    /// The full serialized length, including `datum_type` and `datum_body_len`.
    fn datum_len(&self, max_depth: usize, depth: usize) -> Result<usize> {
        check_depth(max_depth, depth)?;

        /* datum_type's len */
        let dtype_len = mem::size_of::<DatumTypeInt>();

        /* datum_body_len's len */
        let dbody_len_len = match self {
            Datum::Null | Datum::Bool(_) | Datum::I64(_) | Datum::F64(_) => 0,
            _ => mem::size_of::<DatumBodyLen>(),
        };

        /* datum_body's len */
        let dbody_len = self.body_len(max_depth, depth)?;

        Ok(dtype_len + dbody_len_len + dbody_len)
    }

    fn body_len(&self, max_depth: usize, depth: usize) -> Result<usize> {
        let len = match self {
            Datum::Null => 0,
            Datum::Bool(_) => mem::size_of::<u8>(),
            Datum::I64(i) => mem::size_of_val(i),
            Datum::F64(f) => mem::size_of_val(f),
            Datum::Bytes(b) => b.len(),
            Datum::Str(s) => s.len(),
            Datum::Seq(members) => {
                /* members_count's len */
                let mut body_len = mem::size_of::<MembersCount>();

                /* members' lens */
                for member in members {
                    body_len += member.datum_len(max_depth, depth + 1)?;
                }

                body_len
            }
            Datum::Record(Record { name, fields }) => {
                /* name's len */
                let mut body_len = mem::size_of::<DatumBodyLen>() + name.len();

                /* members_count's len */
                body_len += mem::size_of::<MembersCount>();

                /* members' lens */
                for field in fields {
                    body_len += mem::size_of::<DatumBodyLen>() + field.name.len();
                    body_len += field.value.datum_len(max_depth, depth + 1)?;
                }

                body_len
            }
        };
        Ok(len)
    }
}

fn check_depth(max_depth: usize, depth: usize) -> Result<()> {
    if depth > max_depth {
        return Err(anyhow!(
            "Datum nesting exceeds the depth limit of {}.",
            max_depth
        ));
    }
    Ok(())
}

fn ser_name(w: &mut impl Write, name: &str, w_len: &mut WriteLen) -> Result<()> {
    let name_len = DatumBodyLen::from_dynalen_body(name.as_bytes())?;
    put(w, &name_len.to_le_bytes(), w_len)?;
    put(w, name.as_bytes(), w_len)
}

fn put(w: &mut impl Write, buf: &[u8], w_len: &mut WriteLen) -> Result<()> {
    w.write_all(buf)?;
    w_len.0 += buf.len();
    Ok(())
}
