//! SHA-256 compression using the x86 SHA extensions.
//!
//! The state is held as two 128-bit lanes, `abef` and `cdgh`, the layout
//! `sha256rnds2` expects. Each `rounds4` call covers four rounds.

use core::arch::x86_64::*;

use super::{BLOCK_SIZE, K};

pub(super) fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_SIZE]) {
    // SAFETY: this module is only compiled when sha, sse2, ssse3 and sse4.1
    // are enabled for the target.
    unsafe { compress_sha_ni(state, block) }
}

#[inline(always)]
unsafe fn schedule(v0: __m128i, v1: __m128i, v2: __m128i, v3: __m128i) -> __m128i {
    let t1 = _mm_sha256msg1_epu32(v0, v1);
    let t2 = _mm_alignr_epi8(v3, v2, 4);
    let t3 = _mm_add_epi32(t1, t2);
    _mm_sha256msg2_epu32(t3, v3)
}

#[inline(always)]
unsafe fn rounds4(abef: &mut __m128i, cdgh: &mut __m128i, w: __m128i, i: usize) {
    let k = _mm_loadu_si128(K.as_ptr().add(4 * i).cast::<__m128i>());
    let t1 = _mm_add_epi32(w, k);
    *cdgh = _mm_sha256rnds2_epu32(*cdgh, *abef, t1);
    let t2 = _mm_shuffle_epi32(t1, 0x0E);
    *abef = _mm_sha256rnds2_epu32(*abef, *cdgh, t2);
}

unsafe fn compress_sha_ni(state: &mut [u32; 8], block: &[u8; BLOCK_SIZE]) {
    // Byte swap within each 32-bit word
    let mask = _mm_set_epi64x(0x0C0D_0E0F_0809_0A0B, 0x0405_0607_0001_0203);

    let state_ptr = state.as_ptr().cast::<__m128i>();
    let dcba = _mm_loadu_si128(state_ptr);
    let hgfe = _mm_loadu_si128(state_ptr.add(1));

    let cdab = _mm_shuffle_epi32(dcba, 0xB1);
    let efgh = _mm_shuffle_epi32(hgfe, 0x1B);
    let mut abef = _mm_alignr_epi8(cdab, efgh, 8);
    let mut cdgh = _mm_blend_epi16(efgh, cdab, 0xF0);

    let abef_save = abef;
    let cdgh_save = cdgh;

    let data = block.as_ptr().cast::<__m128i>();
    let mut w = [
        _mm_shuffle_epi8(_mm_loadu_si128(data), mask),
        _mm_shuffle_epi8(_mm_loadu_si128(data.add(1)), mask),
        _mm_shuffle_epi8(_mm_loadu_si128(data.add(2)), mask),
        _mm_shuffle_epi8(_mm_loadu_si128(data.add(3)), mask),
    ];

    for (i, &words) in w.iter().enumerate() {
        rounds4(&mut abef, &mut cdgh, words, i);
    }
    for i in 4..16 {
        let next = schedule(w[0], w[1], w[2], w[3]);
        rounds4(&mut abef, &mut cdgh, next, i);
        w = [w[1], w[2], w[3], next];
    }

    abef = _mm_add_epi32(abef, abef_save);
    cdgh = _mm_add_epi32(cdgh, cdgh_save);

    let feba = _mm_shuffle_epi32(abef, 0x1B);
    let dchg = _mm_shuffle_epi32(cdgh, 0xB1);
    let dcba = _mm_blend_epi16(feba, dchg, 0xF0);
    let hgef = _mm_alignr_epi8(dchg, feba, 8);

    let out = state.as_mut_ptr().cast::<__m128i>();
    _mm_storeu_si128(out, dcba);
    _mm_storeu_si128(out.add(1), hgef);
}
