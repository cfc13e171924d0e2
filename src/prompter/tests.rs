use crate::errors::Result;
use crate::prompter::models::{Flow, FlowCtrl};
use crate::prompter::prompter::{Prompter, SessionEnd, SessionSummary};
use crate::ui::ansi::{ENTER_ALT_SCREEN, EXIT_ALT_SCREEN, HIDE_CURSOR};
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

/// Replays a fixed list of replies and records what it was shown.
struct ScriptFlow {
    renders: Rc<RefCell<u32>>,
    seen: Rc<RefCell<Vec<String>>>,
    script: Vec<FlowCtrl>,
}

fn script(replies: Vec<FlowCtrl>) -> (ScriptFlow, Rc<RefCell<u32>>, Rc<RefCell<Vec<String>>>) {
    let renders = Rc::new(RefCell::new(0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let flow = ScriptFlow {
        renders: renders.clone(),
        seen: seen.clone(),
        script: replies,
    };
    (flow, renders, seen)
}

impl Flow for ScriptFlow {
    fn render(&mut self) -> Result<()> {
        *self.renders.borrow_mut() += 1;
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.seen.borrow_mut().push(input.to_string());
        Ok(if self.script.is_empty() {
            FlowCtrl::Continue
        } else {
            self.script.remove(0)
        })
    }
}

fn run(prompter: &Prompter, flow: ScriptFlow, input: &str) -> (SessionSummary, String) {
    let mut term = Vec::new();
    let summary = prompter
        .run_with_io(flow, Cursor::new(input.as_bytes().to_vec()), &mut term)
        .unwrap();
    (summary, String::from_utf8(term).unwrap())
}

#[test]
fn finishes_when_the_flow_does() {
    let (flow, renders, seen) = script(vec![FlowCtrl::Continue, FlowCtrl::Finish]);
    let (summary, _) = run(&Prompter::new(), flow, "next\n today \nnever\n");

    assert_eq!(
        summary,
        SessionSummary {
            end: SessionEnd::Finished,
            commands: 2
        }
    );
    assert_eq!(*renders.borrow(), 2);
    assert_eq!(*seen.borrow(), vec!["next", "today"]);
}

#[test]
fn exit_words_end_the_session_case_insensitively() {
    assert!(Prompter::is_exit("EXIT"));
    assert!(Prompter::is_exit("q"));
    assert!(Prompter::is_exit("Quit"));
    assert!(!Prompter::is_exit("next"));

    let (flow, renders, seen) = script(Vec::new());
    let (summary, _) = run(&Prompter::new(), flow, "next\nQUIT\nnever\n");

    assert_eq!(summary.end, SessionEnd::ExitWord);
    assert_eq!(summary.commands, 1);
    assert_eq!(*renders.borrow(), 2);
    assert_eq!(*seen.borrow(), vec!["next"]);
}

#[test]
fn end_of_input_stops_after_one_render() {
    let (flow, renders, _) = script(Vec::new());
    let (summary, _) = run(&Prompter::new(), flow, "");

    assert_eq!(summary.end, SessionEnd::EndOfInput);
    assert_eq!(summary.commands, 0);
    assert_eq!(*renders.borrow(), 1);
}

#[test]
fn blank_lines_reach_the_flow_but_are_not_counted() {
    let (flow, _, seen) = script(Vec::new());
    let (summary, _) = run(&Prompter::new(), flow, "\n   \nnext\n");

    assert_eq!(summary.commands, 1);
    assert_eq!(*seen.borrow(), vec!["", "", "next"]);
}

#[test]
fn alt_screen_is_entered_and_left_around_the_session() {
    let (flow, _, _) = script(Vec::new());
    let (_, term) = run(&Prompter::new().with_alt_screen(true), flow, "exit\n");

    assert!(term.starts_with(ENTER_ALT_SCREEN));
    assert!(term.ends_with(EXIT_ALT_SCREEN));
    assert!(term.contains(HIDE_CURSOR));

    let (flow, _, _) = script(Vec::new());
    let (_, term) = run(&Prompter::new(), flow, "exit\n");
    assert!(!term.contains(ENTER_ALT_SCREEN));
}

#[test]
fn session_end_reads_as_a_phrase() {
    assert_eq!(SessionEnd::EndOfInput.to_string(), "end of input");
    assert_eq!(SessionEnd::ExitWord.to_string(), "exit word");
}
