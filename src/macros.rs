macro_rules! bytes_to_lanes {
    ($n:ty, $bytes:expr, $lanes:expr) => {
        for (b, n) in $bytes.chunks_exact(core::mem::size_of::<$n>()).zip($lanes.iter_mut()) {
            let mut buf = [0u8; core::mem::size_of::<$n>()];
            buf.copy_from_slice(b);
            *n = <$n>::from_le_bytes(buf);
        }
    };
}

macro_rules! lanes_to_bytes {
    ($n:ty, $lanes:expr, $bytes:expr) => {
        for (b, n) in $bytes.chunks_exact_mut(core::mem::size_of::<$n>()).zip($lanes.iter()) {
            b.copy_from_slice(&n.to_le_bytes());
        }
    };
}

/// Runs `$body` with `$h` bound as a type alias for the hasher the variant selects.
macro_rules! with_sha3 {
    ($variant:expr, |$h:ident| $body:expr) => {
        match $variant {
            $crate::sha3::Sha3Variant::Sha3_224 => {
                type $h = $crate::sha3::Sha3_224;
                $body
            }
            $crate::sha3::Sha3Variant::Sha3_256 => {
                type $h = $crate::sha3::Sha3_256;
                $body
            }
            $crate::sha3::Sha3Variant::Sha3_384 => {
                type $h = $crate::sha3::Sha3_384;
                $body
            }
            $crate::sha3::Sha3Variant::Sha3_512 => {
                type $h = $crate::sha3::Sha3_512;
                $body
            }
        }
    };
}

pub(crate) use bytes_to_lanes;
pub(crate) use lanes_to_bytes;
pub(crate) use with_sha3;
