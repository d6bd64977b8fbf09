use crate::helpers::{gen_order, Order, Point};
use anyhow::Result;
use marshal::Codec;
use rand::Rng;
use std::sync::Arc;
use std::thread;

const THREADS_CT: usize = 8;
const CALLS_PER_THREAD: usize = 50;

fn round_trip_points(codec: &Codec) -> Result<()> {
    let mut rng = rand::thread_rng();
    for _ in 0..CALLS_PER_THREAD {
        let p = Point {
            x: rng.gen(),
            y: rng.gen(),
        };

        let blob = codec.encode_binary(Some(&p))?;
        assert_eq!(Some(p.clone()), codec.decode_binary::<Point>(Some(&blob[..]))?);

        let doc = codec.encode_text(Some(&p))?;
        assert_eq!(Some(p), codec.decode_text::<Point>(&doc)?);
    }
    Ok(())
}

#[test]
fn shared_by_reference() -> Result<()> {
    let codec = Codec::default();
    thread::scope(|s| {
        let handles = (0..THREADS_CT)
            .map(|_| s.spawn(|| round_trip_points(&codec)))
            .collect::<Vec<_>>();
        for handle in handles {
            match handle.join() {
                Ok(res) => res?,
                Err(e) => std::panic::resume_unwind(e),
            }
        }
        Ok(())
    })
}

#[test]
fn shared_by_arc() -> Result<()> {
    let codec = Arc::new(Codec::default());
    let order = Arc::new(gen_order());
    let exp_blob = codec.encode_binary(Some(&*order))?;

    let handles = (0..THREADS_CT)
        .map(|_| {
            let codec = Arc::clone(&codec);
            let order = Arc::clone(&order);
            thread::spawn(move || -> Result<Vec<u8>> {
                let blob = codec.encode_binary(Some(&*order))?;
                let doc = codec.encode_text(Some(&*order))?;
                assert_eq!(Some(&*order), codec.decode_text::<Order>(&doc)?.as_ref());
                Ok(blob)
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let blob = match handle.join() {
            Ok(res) => res?,
            Err(e) => std::panic::resume_unwind(e),
        };
        assert_eq!(exp_blob, blob);
    }
    Ok(())
}
