use anyhow::Result;
use rust_tour::{CliConfig, MenuSession, Topic, TourEngine};
use std::io::Cursor;

fn test_config(no_pause: bool) -> CliConfig {
    CliConfig {
        topic: None,
        all: false,
        list: false,
        rule_width: 60,
        no_pause,
        timings: false,
        config: None,
        verbose: false,
    }
}

fn run_session(input: &str, config: CliConfig) -> Result<String> {
    let mut out = Vec::new();
    let mut session = MenuSession::new(Cursor::new(input.to_string()), &mut out, config);
    session.run()?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_full_session_visits_every_topic() -> Result<()> {
    let output = run_session("1\n2\n3\n4\n0\n", test_config(true))?;

    assert!(output.contains("RUST DATA STRUCTURES TOUR"));
    assert!(output.contains("ARRAYS AND VECTORS IN RUST"));
    assert!(output.contains("HASHMAPS IN RUST"));
    assert!(output.contains("STRUCTS IN RUST"));
    assert!(output.contains("CONSTRUCTING VALUES IN RUST"));
    assert!(output.contains("Happy coding! 🚀"));

    Ok(())
}

#[test]
fn test_run_all_via_menu_token() -> Result<()> {
    let output = run_session("5\n0\n", test_config(true))?;

    // topics run in menu order, then the completion banner
    let arrays_at = output.find("ARRAYS AND VECTORS IN RUST").unwrap();
    let maps_at = output.find("HASHMAPS IN RUST").unwrap();
    let structs_at = output.find("STRUCTS IN RUST").unwrap();
    let constructing_at = output.find("CONSTRUCTING VALUES IN RUST").unwrap();
    let done_at = output.find("ALL EXAMPLES COMPLETED!").unwrap();

    assert!(arrays_at < maps_at);
    assert!(maps_at < structs_at);
    assert!(structs_at < constructing_at);
    assert!(constructing_at < done_at);

    Ok(())
}

#[test]
fn test_pause_prompt_waits_for_a_line() -> Result<()> {
    // the blank line feeds the "Press ENTER to continue..." prompt
    let output = run_session("2\n\n0\n", test_config(false))?;

    assert!(output.contains("Press ENTER to continue..."));
    assert!(output.contains("HASHMAPS IN RUST"));
    assert!(output.contains("Happy coding!"));

    Ok(())
}

#[test]
fn test_invalid_input_never_runs_a_topic() -> Result<()> {
    let output = run_session("arrays\n7\n0\n", test_config(true))?;

    assert_eq!(output.matches("❌ Invalid choice. Please enter 0-5.").count(), 2);
    for topic in Topic::ALL {
        assert!(
            !output.contains(topic.banner()),
            "topic {} must not run on invalid input",
            topic.slug()
        );
    }

    Ok(())
}

#[test]
fn test_scripted_input_without_exit_token_terminates() -> Result<()> {
    // no "0" anywhere; EOF has to end the session
    let output = run_session("1\n", test_config(true))?;

    assert!(output.contains("ARRAYS AND VECTORS IN RUST"));
    Ok(())
}

#[test]
fn test_one_shot_topic_run_matches_menu_run() -> Result<()> {
    let mut engine = TourEngine::new(test_config(true));
    let mut direct = Vec::new();
    engine.run_topic(&mut direct, Topic::Maps)?;
    let direct = String::from_utf8(direct)?;

    let via_menu = run_session("2\n0\n", test_config(true))?;

    // the lesson body is identical however it is invoked
    assert!(direct.contains("=== MAP BASICS ==="));
    assert!(via_menu.contains(&direct));

    Ok(())
}

#[test]
fn test_sessions_are_deterministic() -> Result<()> {
    let first = run_session("5\n0\n", test_config(true))?;
    let second = run_session("5\n0\n", test_config(true))?;
    assert_eq!(first, second);
    Ok(())
}
