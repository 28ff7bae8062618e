// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use hwaes::{Aead, Gcm, is_supported, new_cipher};

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];
const NO_AD: &[u8] = &[];

fn benchmark_gcm_seal(c: &mut Criterion) {
    if !is_supported() {
        return;
    }

    for key_size in [16usize, 32] {
        let mut cipher = new_cipher(&vec![0u8; key_size]).expect("new_cipher failed");
        let mut group = c.benchmark_group(format!("{}_gcm_seal", cipher.name().to_lowercase()));
        let mut gcm = Gcm::new(&mut cipher).expect("Gcm::new failed");

        for size in SIZES.iter() {
            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
                let nonce = [0u8; 12];
                let plaintext = vec![0u8; size];
                let mut sealed = Vec::with_capacity(size + 16);

                b.iter(|| {
                    sealed.clear();
                    gcm.seal(
                        black_box(&mut sealed),
                        black_box(nonce.as_slice()),
                        black_box(plaintext.as_slice()),
                        black_box(NO_AD),
                    )
                    .expect("seal failed");
                });
            });
        }
        group.finish();
    }
}

fn benchmark_gcm_open(c: &mut Criterion) {
    if !is_supported() {
        return;
    }

    for key_size in [16usize, 32] {
        let mut cipher = new_cipher(&vec![0u8; key_size]).expect("new_cipher failed");
        let mut group = c.benchmark_group(format!("{}_gcm_open", cipher.name().to_lowercase()));
        let mut gcm = Gcm::new(&mut cipher).expect("Gcm::new failed");

        for size in SIZES.iter() {
            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
                let nonce = [0u8; 12];
                let mut sealed = Vec::new();
                gcm.seal(&mut sealed, &nonce, &vec![0u8; size], NO_AD)
                    .expect("initial seal failed");
                let mut opened = Vec::with_capacity(size);

                b.iter(|| {
                    opened.clear();
                    gcm.open(
                        black_box(&mut opened),
                        black_box(nonce.as_slice()),
                        black_box(sealed.as_slice()),
                        black_box(NO_AD),
                    )
                    .expect("open failed");
                });
            });
        }
        group.finish();
    }
}

fn benchmark_reference_gcm(c: &mut Criterion) {
    let aes128 = Aes128Gcm::new_from_slice(&[0u8; 16]).expect("new_from_slice failed");
    let aes256 = Aes256Gcm::new_from_slice(&[0u8; 32]).expect("new_from_slice failed");
    let nonce = GenericArray::from_slice(&[0u8; 12]);

    let mut group = c.benchmark_group("reference_gcm_seal");

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("aes-128 {} bytes", size), size, |b, &size| {
            let mut data = vec![0u8; size];

            b.iter(|| {
                aes128
                    .encrypt_in_place_detached(
                        black_box(nonce),
                        black_box(NO_AD),
                        black_box(data.as_mut_slice()),
                    )
                    .expect("encrypt failed")
            });
        });
        group.bench_with_input(format!("aes-256 {} bytes", size), size, |b, &size| {
            let mut data = vec![0u8; size];

            b.iter(|| {
                aes256
                    .encrypt_in_place_detached(
                        black_box(nonce),
                        black_box(NO_AD),
                        black_box(data.as_mut_slice()),
                    )
                    .expect("encrypt failed")
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_gcm_seal,
    benchmark_gcm_open,
    benchmark_reference_gcm
);
criterion_main!(benches);
