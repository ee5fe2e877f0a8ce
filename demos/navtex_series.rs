//! Encode a NAVTEX warning as an NRX series and decode it again
//!
//! Run with `RUST_LOG=navtex_nrx=trace` to see chunk boundaries.

use navtex_nrx::{
    NmeaDate, NmeaTime, NrxSentence, SeriesAssembler, SeriesConfig, SeriesHeader, encode_series,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("navtex_nrx=debug")),
        )
        .init();

    let message = "ESTONIAN NAV WARN 006/18\n\
        GULF OF FINLAND\n\
        VESSELS NEEDING ASSISTANCE OF ICEBREAKER IN THE P*RT OF SILLAME\n\
        HAVE TO COMPLY WITH THE FOLLOWING REQUIREMENTS:\n\
        - ICE CL*SS 1D LLOYD'S REGISTER OR ALTERNATIVE EQUIVALENT,\n\
        - MAIN ENGINE POWER AT LEAST 1200 KW.";

    let header = SeriesHeader::new(
        0,
        "UA98".parse()?,
        NmeaTime::new(10, 23, 8.0)?,
        NmeaDate::new(2018, 3, 1)?,
    )
    .with_frequency_table_index(1);

    let lines = encode_series(message, &header, &SeriesConfig::navtex())?;
    for line in &lines {
        println!("{}", line);
    }

    // Receivers may deliver sentences out of order
    let mut assembler = SeriesAssembler::new();
    for line in lines.iter().rev() {
        assembler.add_sentence(NrxSentence::parse(line)?)?;
        if !assembler.is_complete() {
            println!("Waiting for sentences {:?}", assembler.missing_sentences());
        }
    }

    println!("\n{}", assembler.assemble()?);
    Ok(())
}
