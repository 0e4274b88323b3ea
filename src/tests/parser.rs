use test_case::test_case;

use crate::{ExpressionTree, Node, Operator, precedence, error::ExpressionFault, tests::util::{chain, nested}};

#[test]
fn test_parse_structure() {
    let tree = tree!("(3+4)*2");

    let (left, right) = match tree.root_node() {
        Some(&Node::Operator { op: Operator::Multiply, left, right }) => (left, right),
        other => panic!("unexpected root {:?}", other),
    };
    assert_eq!(tree[right], Node::Operand('2'));

    match tree[left] {
        Node::Operator { op: Operator::Add, left, right } => {
            assert_eq!(tree[left], Node::Operand('3'));
            assert_eq!(tree[right], Node::Operand('4'));
        }
        other => panic!("unexpected left child {:?}", other),
    }

    assert_eq!(tree.len(), 5);
}

#[test]
fn test_parse_precedence_and_associativity() {
    // Higher precedence binds tighter
    assert_eq!(tree!("3+4*2").pre_order_notation(), "+3*42");
    assert_eq!(tree!("3*4+2").pre_order_notation(), "+*342");

    // Equal precedence groups from the left
    assert_eq!(tree!("8-4-2").pre_order_notation(), "--842");
    assert_eq!(tree!("8/4*2").pre_order_notation(), "*/842");
    assert_eq!(tree!("1+2-3+4").pre_order_notation(), "+-+1234");

    // Parentheses override both
    assert_eq!(tree!("8-(4-2)").pre_order_notation(), "-8-42");
    assert_eq!(tree!("(1+2)*(3-4)").pre_order_notation(), "*+12-34");
}

#[test]
fn test_parse_letters() {
    let tree = tree!("a*(b+1)");
    assert_eq!(tree.leaves(), ['a', 'b', '1']);
    assert_eq!(tree.pre_order_notation(), "*a+b1");
}

#[test]
fn test_in_order_notation() {
    assert_eq!(tree!("(3+4)*2").in_order_notation(), "3+4*2");
    assert_eq!(tree!("8-(4-2)").in_order_notation(), "8-4-2");
    assert_eq!(tree!("((7))").in_order_notation(), "7");
    assert_eq!(ExpressionTree::default().in_order_notation(), "");
}

#[test]
fn test_parse_single_operand() {
    let tree = tree!("7");
    assert_eq!(tree.root_node(), Some(&Node::Operand('7')));
    assert_eq!(tree.len(), 1);

    let tree = tree!("((7))");
    assert_eq!(tree.root_node(), Some(&Node::Operand('7')));
}

#[test_case("" => ExpressionFault::Empty ; "empty")]
#[test_case("()" => ExpressionFault::Empty ; "empty parentheses")]
#[test_case("(3+4" => ExpressionFault::UnclosedParenthesis(0) ; "unclosed")]
#[test_case("((3+4)*2" => ExpressionFault::UnclosedParenthesis(0) ; "unclosed outer")]
#[test_case("3+4)" => ExpressionFault::UnopenedParenthesis(3) ; "unopened")]
#[test_case(")" => ExpressionFault::UnopenedParenthesis(0) ; "lone close")]
#[test_case("3++4" => ExpressionFault::MissingOperand('+', 1) ; "consecutive operators")]
#[test_case("3*-4" => ExpressionFault::MissingOperand('*', 1) ; "unary minus")]
#[test_case("3+" => ExpressionFault::MissingOperand('+', 1) ; "trailing operator")]
#[test_case("+3" => ExpressionFault::MissingOperand('+', 0) ; "leading operator")]
#[test_case("(+3)" => ExpressionFault::MissingOperand('+', 1) ; "operator after parenthesis")]
#[test_case("+34" => ExpressionFault::MissingOperand('+', 0) ; "leading operator before operands")]
#[test_case("(3+)" => ExpressionFault::MissingOperand('+', 2) ; "operator before close")]
#[test_case("3+()" => ExpressionFault::Empty ; "empty parentheses after operator")]
#[test_case("34" => ExpressionFault::MissingOperator ; "adjacent operands")]
#[test_case("34+" => ExpressionFault::MissingOperator ; "trailing operator after operands")]
#[test_case("3(+4)" => ExpressionFault::MissingOperator ; "operand before group")]
#[test_case("(3)(+4)" => ExpressionFault::MissingOperator ; "adjacent groups")]
#[test_case("3(4)" => ExpressionFault::MissingOperator ; "implicit multiplication")]
#[test_case("3 + 4" => ExpressionFault::UnsupportedCharacter(' ', 1) ; "whitespace")]
#[test_case("2^3" => ExpressionFault::UnsupportedCharacter('^', 1) ; "unknown operator")]
fn test_parse_invalid(infix: &str) -> ExpressionFault {
    match ExpressionTree::parse(infix) {
        Err(crate::error::NodeError::InvalidExpression(fault)) => fault,
        other => panic!("expected an invalid expression, got {:?}", other),
    }
}

#[test_case('+' => 1 ; "plus")]
#[test_case('-' => 1 ; "minus")]
#[test_case('*' => 2 ; "times")]
#[test_case('/' => 2 ; "divide")]
#[test_case('(' => -1 ; "left parenthesis")]
#[test_case(')' => -1 ; "right parenthesis")]
#[test_case('7' => -1 ; "digit")]
#[test_case('x' => -1 ; "letter")]
fn test_precedence(ch: char) -> i32 {
    precedence(ch)
}

#[test]
fn test_parse_deep_expressions() {
    // Neither building nor walking these should recurse
    let tree = tree!(&nested("1", 50_000));
    assert_eq!(tree.len(), 1);

    let tree = tree!(&chain('1', '+', 50_000));
    assert_eq!(tree.leaves().len(), 50_000);
    assert_eq!(tree.height(), 49_999);
    assert_eq!(tree.depth(), 49_999);
}
