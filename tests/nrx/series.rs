//! Tests for splitting messages over sentence series and reassembling them

use navtex_nrx::series::{reassemble, split};
use navtex_nrx::{
    DataStatus, NmeaDate, NmeaTime, NrxError, NrxSentence, SeriesAssembler, SeriesConfig,
    SeriesHeader, TalkerId, TimeSentence, decode_series, encode_series, reassemble_series,
};

const MESSAGE: &str =
    "GULF OF FINLAND\r\nSINCE 01 MAR 18\r\nNO ICEBREAKER SERVICE FOR TUGS AND BARGES";

fn header() -> SeriesHeader {
    SeriesHeader::new(
        0,
        "UA98".parse().unwrap(),
        NmeaTime::new(10, 23, 8.0).unwrap(),
        NmeaDate::new(2018, 3, 1).unwrap(),
    )
    .with_frequency_table_index(1)
}

#[test]
fn test_encode_known_series() {
    let lines = encode_series(MESSAGE, &header(), &SeriesConfig::navtex()).unwrap();
    assert_eq!(
        lines,
        vec![
            "$CRNRX,002,001,00,UA98,1,102308.00,01,03,2018,75,0,A,GULF OF FINLAND^0D^0ASINCE 01*23",
            "$CRNRX,002,002,00,,,,,,,,,, MAR 18^0D^0ANO ICEBREAKER SERVICE FOR TUGS AND BARGES*75",
        ]
    );
}

#[test]
fn test_decode_known_series_any_order() {
    let lines = [
        "$CRNRX,002,002,00,,,,,,,,,, MAR 18^0D^0ANO ICEBREAKER SERVICE FOR TUGS AND BARGES*75",
        "$CRNRX,002,001,00,UA98,1,102308.00,01,03,2018,75,0,A,GULF OF FINLAND^0D^0ASINCE 01*23",
    ];
    assert_eq!(decode_series(lines).unwrap(), MESSAGE);
}

#[test]
fn test_split_short_text() {
    assert_eq!(split("HELLO", 28, 57).unwrap(), vec!["HELLO"]);
}

#[test]
fn test_split_exact_budget() {
    // 29 characters fit the first chunk exactly
    let text = "A".repeat(29);
    assert_eq!(split(&text, 28, 57).unwrap().len(), 1);

    let text = "A".repeat(30);
    let chunks = split(&text, 28, 57).unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].len(), 29);
    assert_eq!(chunks[1], "A");
}

#[test]
fn test_split_never_cuts_escape_token() {
    // A naive cut after 4 characters would leave "AB^0" and "A..."
    let chunks = split("AB^0AXYZ", 3, 3).unwrap();
    assert_eq!(chunks, vec!["AB", "^0AX", "YZ"]);
    assert_eq!(reassemble(&chunks), "AB^0AXYZ");
}

#[test]
fn test_split_rejects_small_budget() {
    assert!(matches!(split("HELLO", 1, 57), Err(NrxError::InvalidArgument(_))));
    assert!(matches!(split("HELLO", 28, 1), Err(NrxError::InvalidArgument(_))));
}

#[test]
fn test_unbounded_budgets() {
    let config = SeriesConfig::new(TalkerId::CR, usize::MAX, usize::MAX);
    let lines = encode_series(MESSAGE, &header(), &config).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(decode_series(&lines).unwrap(), MESSAGE);
}

#[test]
fn test_encode_empty_message() {
    let lines = encode_series("", &header(), &SeriesConfig::navtex()).unwrap();
    assert_eq!(lines.len(), 1);

    let nrx = NrxSentence::parse(&lines[0]).unwrap();
    assert_eq!(nrx.number_of_sentences().unwrap(), 1);
    assert_eq!(nrx.total_characters_in_series().unwrap(), 0);
    assert!(!nrx.has_message_body());
    assert_eq!(decode_series(&lines).unwrap(), "");
}

#[test]
fn test_header_only_on_first_sentence() {
    let text = "X".repeat(200);
    let lines = encode_series(&text, &header(), &SeriesConfig::navtex()).unwrap();
    assert_eq!(lines.len(), 4);

    for (i, line) in lines.iter().enumerate() {
        let nrx = NrxSentence::parse(line).unwrap();
        assert_eq!(nrx.number_of_sentences().unwrap(), 4);
        assert_eq!(nrx.sentence_number().unwrap() as usize, i + 1);
        assert_eq!(nrx.sequential_id().unwrap(), 0);
        if i == 0 {
            assert_eq!(nrx.total_characters_in_series().unwrap(), 200);
            assert_eq!(nrx.status().unwrap(), DataStatus::Active);
            assert!(nrx.time().is_ok());
        } else {
            assert!(nrx.message_code().is_err());
            assert!(nrx.time().is_err());
            assert!(nrx.status().is_err());
        }
    }
}

#[test]
fn test_custom_talker_and_budgets() {
    let config = SeriesConfig::new(TalkerId::IN, 10, 20);
    let lines = encode_series("A LONGER MESSAGE, WITH COMMAS, OK", &header(), &config).unwrap();
    assert!(lines.iter().all(|l| l.starts_with("$INNRX,")));
    assert_eq!(
        decode_series(&lines).unwrap(),
        "A LONGER MESSAGE, WITH COMMAS, OK"
    );
}

#[test]
fn test_encode_rejects_invalid_header() {
    let header = header().with_frequency_table_index(10);
    assert!(matches!(
        encode_series("TEXT", &header, &SeriesConfig::navtex()),
        Err(NrxError::InvalidArgument(_))
    ));

    let header = SeriesHeader {
        sequential_id: 100,
        ..self::header()
    };
    assert!(matches!(
        encode_series("TEXT", &header, &SeriesConfig::navtex()),
        Err(NrxError::InvalidArgument(_))
    ));
}

#[test]
fn test_encode_rejects_too_many_sentences() {
    // With budgets of 2 every sentence holds three characters
    let config = SeriesConfig::new(TalkerId::CR, 2, 2);
    let text = "A".repeat(3 * 999);
    assert_eq!(encode_series(&text, &header(), &config).unwrap().len(), 999);

    let text = "A".repeat(3 * 999 + 1);
    assert!(matches!(
        encode_series(&text, &header(), &config),
        Err(NrxError::InvalidArgument(_))
    ));
}

#[test]
fn test_assembler_incomplete() {
    let lines = encode_series(&"Y".repeat(120), &header(), &SeriesConfig::navtex()).unwrap();
    assert_eq!(lines.len(), 3);

    let mut assembler = SeriesAssembler::new();
    assembler.add_sentence(NrxSentence::parse(&lines[0]).unwrap()).unwrap();
    assembler.add_sentence(NrxSentence::parse(&lines[2]).unwrap()).unwrap();

    assert!(!assembler.is_complete());
    assert_eq!(assembler.sentences_received(), 2);
    assert_eq!(assembler.total_sentences(), Some(3));
    assert_eq!(assembler.missing_sentences(), vec![2]);
    assert_eq!(
        assembler.assemble(),
        Err(NrxError::SeriesIncomplete {
            expected: 3,
            received: 2
        })
    );

    assembler.add_sentence(NrxSentence::parse(&lines[1]).unwrap()).unwrap();
    assert!(assembler.is_complete());
    assert_eq!(assembler.assemble().unwrap(), "Y".repeat(120));
}

#[test]
fn test_assembler_keeps_header() {
    let lines = encode_series(MESSAGE, &header(), &SeriesConfig::navtex()).unwrap();

    let mut assembler = SeriesAssembler::new();
    assembler.add_sentence(NrxSentence::parse(&lines[1]).unwrap()).unwrap();
    assert!(assembler.first_sentence().is_none());
    assert!(assembler.message_code().is_none());

    assembler.add_sentence(NrxSentence::parse(&lines[0]).unwrap()).unwrap();
    let first = assembler.first_sentence().unwrap();
    assert_eq!(first.frequency_table_index().unwrap(), 1);
    assert_eq!(assembler.message_code().unwrap().to_string(), "UA98");
}

#[test]
fn test_assembler_rejects_other_series() {
    let ours = encode_series(&"Z".repeat(60), &header(), &SeriesConfig::navtex()).unwrap();
    let other_header = SeriesHeader {
        sequential_id: 7,
        ..header()
    };
    let theirs = encode_series(&"Z".repeat(60), &other_header, &SeriesConfig::navtex()).unwrap();

    let mut assembler = SeriesAssembler::new();
    assembler.add_sentence(NrxSentence::parse(&ours[0]).unwrap()).unwrap();
    assert!(matches!(
        assembler.add_sentence(NrxSentence::parse(&theirs[1]).unwrap()),
        Err(NrxError::SeriesMismatch(_))
    ));
}

#[test]
fn test_assembler_duplicate_sentence() {
    let lines = encode_series(MESSAGE, &header(), &SeriesConfig::navtex()).unwrap();
    let mut assembler = SeriesAssembler::new();
    assembler.add_sentence(NrxSentence::parse(&lines[0]).unwrap()).unwrap();
    assembler.add_sentence(NrxSentence::parse(&lines[0]).unwrap()).unwrap();
    assert_eq!(assembler.sentences_received(), 1);
}

#[test]
fn test_reassemble_series_from_parsed() {
    let sentences: Vec<NrxSentence> = encode_series(MESSAGE, &header(), &SeriesConfig::navtex())
        .unwrap()
        .iter()
        .rev()
        .map(|l| NrxSentence::parse(l).unwrap())
        .collect();
    assert_eq!(reassemble_series(sentences).unwrap(), MESSAGE);
}

#[test]
fn test_decode_series_propagates_parse_errors() {
    let lines = ["$CRNRX,,,,,,,,,,,,,*78"];
    assert!(matches!(
        decode_series(lines),
        Err(NrxError::ChecksumMismatch { .. })
    ));
}
