//! End-to-end test with a full Estonian navigational warning

use navtex_nrx::{
    DataStatus, MessageCode, NmeaDate, NmeaTime, NrxSentence, SeriesAssembler, SeriesConfig,
    SeriesHeader, decode_series, encode_series,
};

const WARNING: &str = "210640 UTC FEB\n\
ESTONIAN NAV WARN 006/18\n\
GULF OF FINLAND\n\
SINCE 01 MAR 18\n\
VESSELS NEEDING ASSISTANCE OF ICEBREAKER IN THE P*RT OF SILLAME\n\
HAVE TO COMPLY WITH THE FOLLOWING REQUIREMENTS:\n\
- ICE CL*SS 1D LLOYD'S REGISTER OR ALTERNATIVE EQUIVALENT,\n\
- MAIN ENGINE POWER AT LEAST 1200 KW.\n\
NO ICEBREAKER SERVICE FOR TUGS AND BARGES";

const LINES: [&str; 7] = [
    "$CRNRX,007,001,00,UA98,1,102308.00,01,03,2018,322,0,A,210640 UTC FEB^0AESTONIAN NAV*67",
    "$CRNRX,007,002,00,,,,,,,,,, WARN 006/18^0AGULF OF FINLAND^0ASINCE 01 MAR 18^0AVESSELS*73",
    "$CRNRX,007,003,00,,,,,,,,,, NEEDING ASSISTANCE OF ICEBREAKER IN THE P^2ART OF SILLAME*60",
    "$CRNRX,007,004,00,,,,,,,,,,^0AHAVE TO COMPLY WITH THE FOLLOWING REQUIREMENTS:^0A- ICE*01",
    "$CRNRX,007,005,00,,,,,,,,,, CL^2ASS 1D LLOYD'S REGISTER OR ALTERNATIVE EQUIVALENT^2C*52",
    "$CRNRX,007,006,00,,,,,,,,,,^0A- MAIN ENGINE POWER AT LEAST 1200 KW.^0ANO ICEBREAKER S*11",
    "$CRNRX,007,007,00,,,,,,,,,,ERVICE FOR TUGS AND BARGES*72",
];

fn header() -> SeriesHeader {
    SeriesHeader::new(
        0,
        MessageCode::new('U', 'A', 98).unwrap(),
        NmeaTime::new(10, 23, 8.0).unwrap(),
        NmeaDate::new(2018, 3, 1).unwrap(),
    )
    .with_frequency_table_index(1)
    .with_status(DataStatus::Active)
}

#[test]
fn test_encode_warning() {
    let lines = encode_series(WARNING, &header(), &SeriesConfig::navtex()).unwrap();
    assert_eq!(lines, LINES);
}

#[test]
fn test_decode_warning() {
    assert_eq!(decode_series(LINES).unwrap(), WARNING);
}

#[test]
fn test_decode_warning_shuffled() {
    let mut assembler = SeriesAssembler::new();
    for i in [4, 0, 6, 2, 5, 1, 3] {
        assembler.add_sentence(NrxSentence::parse(LINES[i]).unwrap()).unwrap();
    }
    assert!(assembler.is_complete());
    assert_eq!(assembler.assemble().unwrap(), WARNING);
}

#[test]
fn test_no_chunk_cuts_a_token() {
    // A plain byte cut would end the fifth body on a lone "^"
    for line in LINES {
        let nrx = NrxSentence::parse(line).unwrap();
        let body = nrx.message_body().unwrap();
        assert!(navtex_nrx::reserved::decode(body).is_ok(), "{}", body);
    }
}
