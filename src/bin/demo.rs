//! he-demo: round-trip demonstrations of every scheme in the crate.
//!
//! Runs encrypt/decrypt (and a few homomorphic operations) with the
//! demonstration parameter sets and reports what was recovered. Thin
//! I/O over the library; nothing here is load-bearing.

use clap::{Parser, ValueEnum};
use eyre::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lattice_he::math::{Poly, Sampler, SchoolbookMul};
use lattice_he::params::Params;
use lattice_he::{
    GgswCiphertext, GlevCiphertext, GlweCiphertext, GlwePublicKey, GlweSecretKey, LweCiphertext,
    LweSecretKey, RlweCiphertext, RlweSecretKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scheme {
    Lwe,
    Rlwe,
    Glwe,
    Glev,
    Ggsw,
    All,
}

#[derive(Parser)]
#[command(name = "he-demo")]
#[command(about = "Round-trip demonstrations of the lattice-he schemes")]
#[command(version)]
struct Args {
    /// Scheme to demonstrate
    #[arg(long, value_enum, default_value = "all")]
    scheme: Scheme,

    /// Random seed for deterministic runs (optional)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let mut sampler = match args.seed {
        Some(seed) => Sampler::with_seed(seed),
        None => Sampler::new(),
    };

    match args.scheme {
        Scheme::Lwe => demo_lwe(&mut sampler)?,
        Scheme::Rlwe => demo_rlwe(&mut sampler)?,
        Scheme::Glwe => demo_glwe(&mut sampler)?,
        Scheme::Glev => demo_glev(&mut sampler)?,
        Scheme::Ggsw => demo_ggsw(&mut sampler)?,
        Scheme::All => {
            demo_lwe(&mut sampler)?;
            demo_rlwe(&mut sampler)?;
            demo_glwe(&mut sampler)?;
            demo_glev(&mut sampler)?;
            demo_ggsw(&mut sampler)?;
        }
    }

    Ok(())
}

fn demo_lwe(sampler: &mut Sampler) -> Result<()> {
    let params = Params::lwe_demo();
    let sk = LweSecretKey::generate(256, sampler);
    info!("LWE: k=256, q={}, t={}", params.q, params.t);

    for m in [0, 3, 7, 15] {
        let ct = LweCiphertext::encrypt(m, &sk, &params, sampler)?;
        info!("  encrypt({m}) -> decrypt = {}", ct.decrypt(&sk, &params)?);
    }

    let ct1 = LweCiphertext::encrypt(11, &sk, &params, sampler)?;
    let ct2 = LweCiphertext::encrypt(7, &sk, &params, sampler)?;
    let sum = ct1.add(&ct2, &params)?;
    info!("  11 + 7 mod {} = {}", params.t, sum.decrypt(&sk, &params)?);

    Ok(())
}

fn demo_rlwe(sampler: &mut Sampler) -> Result<()> {
    let params = Params::rlwe_demo();
    let sk = RlweSecretKey::generate(&params, sampler);
    info!("RLWE: n={}, q={}, t={}", params.n, params.q, params.t);

    let m = ramp_message(&params);
    let ct = RlweCiphertext::encrypt(&m, &sk, &params, &SchoolbookMul, sampler)?;
    let dec = ct.decrypt(&sk, &params, &SchoolbookMul)?;
    info!("  round-trip exact: {}", dec == expected_mod_t(&m, &params));

    let ct2 = RlweCiphertext::encrypt(&m, &sk, &params, &SchoolbookMul, sampler)?;
    let dbl = ct.add(&ct2)?.decrypt(&sk, &params, &SchoolbookMul)?;
    info!(
        "  homomorphic doubling, first coeffs: {:?}",
        &dbl.coeffs()[..4]
    );

    Ok(())
}

fn demo_glwe(sampler: &mut Sampler) -> Result<()> {
    let params = Params::glwe_demo();
    let sk = GlweSecretKey::generate(2, &params, sampler);
    let pk = GlwePublicKey::generate(&sk, &params, &SchoolbookMul, sampler)?;
    info!("GLWE: n={}, k=2, q={}, t={}", params.n, params.q, params.t);

    let m = ramp_message(&params);
    let ct = GlweCiphertext::encrypt(&m, &pk, &params, &SchoolbookMul, sampler)?;
    let dec = ct.decrypt(&sk, &params, &SchoolbookMul)?;
    info!("  round-trip exact: {}", dec == expected_mod_t(&m, &params));

    Ok(())
}

fn demo_glev(sampler: &mut Sampler) -> Result<()> {
    let params = Params::glwe_demo();
    let (l, base) = (3usize, 16i64);
    let sk = GlweSecretKey::generate(2, &params, sampler);
    let pk = GlwePublicKey::generate(&sk, &params, &SchoolbookMul, sampler)?;
    info!("GLev: l={l}, beta={base}");

    let m = ramp_message(&params);
    let ct = GlevCiphertext::encrypt(&m, &pk, &params, l, base, &SchoolbookMul, sampler)?;
    for level in 0..=l {
        let dec = ct.decrypt_level(&sk, &params, level, base, &SchoolbookMul)?;
        info!(
            "  level {level} exact: {}",
            dec == expected_mod_t(&m, &params)
        );
    }

    Ok(())
}

fn demo_ggsw(sampler: &mut Sampler) -> Result<()> {
    let params = Params::glwe_demo();
    let (l, base) = (4usize, 16i64);
    let sk = GlweSecretKey::generate(2, &params, sampler);
    let pk = GlwePublicKey::generate(&sk, &params, &SchoolbookMul, sampler)?;
    info!("GGSW: k=2, l={l}, beta={base}");

    let m = ramp_message(&params);
    let ct = GgswCiphertext::encrypt(&m, &pk, &sk, &params, l, base, &SchoolbookMul, sampler)?;
    let dec = ct.decrypt(&sk, &params, 0, base, &SchoolbookMul)?;
    info!(
        "  final-row level 0 exact: {}",
        dec == expected_mod_t(&m, &params)
    );

    Ok(())
}

fn ramp_message(params: &Params) -> Poly {
    Poly::from_coeffs(
        (0..params.n as i64).map(|i| i % params.t).collect(),
        params.q,
    )
}

fn expected_mod_t(m: &Poly, params: &Params) -> Poly {
    Poly::from_coeffs(m.coeffs().to_vec(), params.t)
}
