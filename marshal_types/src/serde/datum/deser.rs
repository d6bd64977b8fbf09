use crate::serde::{Datum, DatumBodyLen, DatumType, DatumTypeInt, Field, MembersCount, Record};
use anyhow::{anyhow, Result};
use std::io::{ErrorKind, Read};
use std::mem;

#[derive(PartialEq, Eq, Debug)]
pub enum ReadResult<T> {
    EOF,
    Some(usize, T),
}

impl Datum {
    pub fn deser<R: Read>(r: &mut R, max_depth: usize) -> Result<ReadResult<Self>> {
        Self::deser_(r, max_depth, 0)
    }

    fn deser_<R: Read>(r: &mut R, max_depth: usize, depth: usize) -> Result<ReadResult<Self>> {
        if depth > max_depth {
            return Err(anyhow!(
                "Datum nesting exceeds the depth limit of {}.",
                max_depth
            ));
        }

        /* datum_type */
        let (mut r_len, dtype_int) = match DatumTypeInt::deser(r) {
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(ReadResult::EOF),
            Err(e) => return Err(anyhow!(e)),
            Ok((r_len, dtype_int)) => (r_len, dtype_int),
        };
        let dtype = DatumType::try_from(dtype_int)?;

        /* datum_body_len and datum_body */
        let dat = match dtype {
            DatumType::Null => Datum::Null,
            DatumType::Bool => {
                let buf: [u8; 1] = Self::deser_fixlen_body(r, &mut r_len)?;
                match buf[0] {
                    0 => Datum::Bool(false),
                    1 => Datum::Bool(true),
                    b => return Err(anyhow!("Invalid Bool body {}.", b)),
                }
            }
            DatumType::I64 => {
                let buf: [u8; mem::size_of::<i64>()] = Self::deser_fixlen_body(r, &mut r_len)?;
                Datum::I64(i64::from_le_bytes(buf))
            }
            DatumType::F64 => {
                let buf: [u8; mem::size_of::<f64>()] = Self::deser_fixlen_body(r, &mut r_len)?;
                Datum::F64(f64::from_le_bytes(buf))
            }
            DatumType::Bytes => {
                let body = Self::deser_dynalen_body(r, &mut r_len)?;
                Datum::Bytes(body)
            }
            DatumType::Str => {
                let body = Self::deser_dynalen_body(r, &mut r_len)?;
                let s = String::from_utf8(body)?;
                Datum::Str(s)
            }
            DatumType::Seq | DatumType::Record => {
                let (delta_r_len, dbody_len) = DatumBodyLen::deser(r).map_err(|e| anyhow!(e))?;
                r_len += delta_r_len;

                let mut body_r_len = 0;
                let dat = if dtype == DatumType::Seq {
                    Self::deser_seq_body(r, max_depth, depth, &mut body_r_len)?
                } else {
                    Self::deser_record_body(r, max_depth, depth, &mut body_r_len)?
                };
                if body_r_len != *dbody_len as usize {
                    return Err(anyhow!(
                        "{:?} declared a body of {} bytes but spans {} bytes.",
                        dtype,
                        *dbody_len,
                        body_r_len
                    ));
                }
                r_len += body_r_len;

                dat
            }
        };

        Ok(ReadResult::Some(r_len, dat))
    }

    fn deser_fixlen_body<R: Read, const LEN: usize>(
        r: &mut R,
        r_len: &mut usize,
    ) -> Result<[u8; LEN]> {
        let mut buf = [0u8; LEN];
        r.read_exact(&mut buf).map_err(|e| anyhow!(e))?;
        *r_len += buf.len();
        Ok(buf)
    }

    fn deser_dynalen_body<R: Read>(r: &mut R, r_len: &mut usize) -> Result<Vec<u8>> {
        let (delta_r_len, dbody_len) = DatumBodyLen::deser(r).map_err(|e| anyhow!(e))?;
        *r_len += delta_r_len;

        // Bounded by what the reader actually holds, not by the declared length.
        let mut buf = vec![];
        Read::take(&mut *r, *dbody_len as u64).read_to_end(&mut buf)?;
        if buf.len() != *dbody_len as usize {
            return Err(anyhow!(
                "EOF after {} of {} body bytes.",
                buf.len(),
                *dbody_len
            ));
        }
        *r_len += buf.len();

        Ok(buf)
    }

    fn deser_name<R: Read>(r: &mut R, r_len: &mut usize) -> Result<String> {
        let body = Self::deser_dynalen_body(r, r_len)?;
        let name = String::from_utf8(body)?;
        Ok(name)
    }

    fn deser_member<R: Read>(
        r: &mut R,
        max_depth: usize,
        depth: usize,
        r_len: &mut usize,
    ) -> Result<Datum> {
        match Self::deser_(r, max_depth, depth + 1)? {
            ReadResult::EOF => Err(anyhow!("EOF while reading a container member.")),
            ReadResult::Some(delta_r_len, dat) => {
                *r_len += delta_r_len;
                Ok(dat)
            }
        }
    }

    fn deser_seq_body<R: Read>(
        r: &mut R,
        max_depth: usize,
        depth: usize,
        r_len: &mut usize,
    ) -> Result<Datum> {
        /* members_count */
        let (delta_r_len, membs_ct) = MembersCount::deser(r).map_err(|e| anyhow!(e))?;
        *r_len += delta_r_len;

        /* members */
        let mut members = vec![];
        for _ in 0..*membs_ct {
            let member = Self::deser_member(r, max_depth, depth, r_len)?;
            members.push(member);
        }
        Ok(Datum::Seq(members))
    }

    fn deser_record_body<R: Read>(
        r: &mut R,
        max_depth: usize,
        depth: usize,
        r_len: &mut usize,
    ) -> Result<Datum> {
        /* name */
        let name = Self::deser_name(r, r_len)?;

        /* members_count */
        let (delta_r_len, membs_ct) = MembersCount::deser(r).map_err(|e| anyhow!(e))?;
        *r_len += delta_r_len;

        /* members */
        let mut fields = vec![];
        for _ in 0..*membs_ct {
            let field_name = Self::deser_name(r, r_len)?;
            let value = Self::deser_member(r, max_depth, depth, r_len)?;
            fields.push(Field {
                name: field_name,
                value,
            });
        }
        Ok(Datum::Record(Record { name, fields }))
    }
}
