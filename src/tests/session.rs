use alloc::vec;

use crate::{Session, error::{ExpressionFault, MathsError, NodeError}};

#[test]
fn test_snapshot() {
    let mut session = Session::new("(3+4)*2").unwrap();
    let snapshot = session.snapshot();

    assert_eq!(snapshot.lines, vec!["R 1 2", "", "  2", "*", "    4", "  +", "    3"]);
    assert_eq!(snapshot.value, Ok(14));
    assert_eq!(snapshot.postfix.as_deref(), Ok("34+2*"));
    assert_eq!(snapshot.prefix.as_deref(), Ok("*+342"));
    assert_eq!(snapshot.leaves, ['3', '4', '2']);
    assert_eq!(session.leaves(), ['3', '4', '2']);
}

#[test]
fn test_edit_cycle() {
    let mut session = Session::new("(3+4)*2").unwrap();
    session.snapshot();

    assert_eq!(session.update_leaf(0, '9'), Ok("(9+4)*2"));
    assert_eq!(session.infix(), "(9+4)*2");
    assert_eq!(session.leaves(), ['9', '4', '2']);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.value, Ok(26));
    assert_eq!(snapshot.postfix.as_deref(), Ok("94+2*"));
    assert_eq!(snapshot.prefix.as_deref(), Ok("*+942"));
    assert_eq!(snapshot.lines, vec!["R 1 2", "", "  2", "*", "    4", "  +", "    9"]);

    assert_eq!(session.update_leaf(2, '0'), Ok("(9+4)*0"));
    assert_eq!(session.snapshot().value, Ok(0));
}

#[test]
fn test_failed_edit_keeps_state() {
    let mut session = Session::new("1-2").unwrap();

    assert_eq!(session.update_leaf(2, '3'), Err(NodeError::IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(session.update_leaf(0, '*'), Err(NodeError::InvalidOperand('*')));
    assert_eq!(session.infix(), "1-2");
    assert_eq!(session.snapshot().value, Ok(-1));
}

#[test]
fn test_snapshot_errors() {
    let mut session = Session::new("a/0").unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.value, Err(MathsError::NonNumericOperand('a')));
    assert_eq!(snapshot.postfix.as_deref(), Ok("a0/"));

    session.update_leaf(0, '4').unwrap();
    assert_eq!(session.snapshot().value, Err(MathsError::DivisionByZero));
}

#[test]
fn test_invalid_session() {
    assert_eq!(Session::new(""), Err(NodeError::InvalidExpression(ExpressionFault::Empty)));
    assert_eq!(
        Session::new("(1+2"),
        Err(NodeError::InvalidExpression(ExpressionFault::UnclosedParenthesis(0))),
    );
}

#[test]
fn test_session_indent() {
    let mut session = Session::new("1+2").unwrap().with_indent(1);
    assert_eq!(session.snapshot().lines, vec!["R 1", "", " 2", "+", " 1"]);
}
