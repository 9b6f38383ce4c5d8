use crate::environment::Environment;
use crate::error_handling::*;
use crate::scanning::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
}

impl BinaryOperator {
    pub fn from_char(character: char) -> Option<Self> {
        use BinaryOperator::*;
        match character {
            '+' => Some(addition),
            '-' => Some(subtraction),
            '*' => Some(multiplication),
            '/' => Some(division),
            _ => None,
        }
    }

    pub fn call(&self, left: f64, right: f64) -> Result<f64> {
        use BinaryOperator::*;
        match self {
            addition => Ok(left + right),
            subtraction => Ok(left - right),
            multiplication => Ok(left * right),
            division if right == 0.0 => Err(CalcError::division_by_zero),
            division => Ok(left / right),
        }
    }
}

pub enum StackNode {
    operator(BinaryOperator),
    // `negate` when an odd run of unary minuses came before the `(`
    paren { negate: bool },
}

impl StackNode {
    fn precedence(&self) -> i32 {
        use BinaryOperator::*;
        match self {
            Self::paren{..} => 0,
            Self::operator(addition | subtraction) => 1,
            Self::operator(multiplication | division) => 2,
        }
    }
}

/// What the next token has to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseState {
    expect_operand,
    expect_operator,
}

/// Operand and operator stacks of one evaluation. Operators are applied as
/// soon as precedence allows, so no tree is ever built.
pub struct Yard<'a> {
    expression: &'a str,
    variables: &'a Environment,
    operands: Vec<f64>,
    stack: Vec<StackNode>,
    state: ParseState,
    // parity of the unary minuses seen since the last operand
    negate: bool,
}

impl<'a> Yard<'a> {
    pub fn new(expression: &'a str, variables: &'a Environment) -> Self {
        Self{
            expression,
            variables,
            operands: Vec::new(),
            stack: Vec::new(),
            state: ParseState::expect_operand,
            negate: false,
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn handle(&mut self, token: Token) -> Result<()> {
        match self.state {
            ParseState::expect_operand => self.handle_edge(token),
            ParseState::expect_operator => self.handle_middle(token),
        }
    }

    fn handle_edge(&mut self, token: Token) -> Result<()> {
        match token {
            Token::number(content) => {
                let value = self.parse_number(&content)?;
                self.add_operand(value)
            },
            Token::identifier{name, glued} => {
                if glued {
                    return Err(CalcError::invalid_variable_name(self.expression.into()));
                }
                let value = self
                    .variables
                    .get(&name)
                    .ok_or(CalcError::undefined_variable(name))?;
                self.add_operand(value)
            },
            Token::left_paren => {
                self.stack.push(StackNode::paren{negate: self.negate});
                self.negate = false;
            },
            Token::operator(BinaryOperator::subtraction) => self.negate ^= true,
            Token::operator(_) | Token::right_paren => {
                return Err(CalcError::unexpected_operator(self.expression.into()))
            },
        }
        Ok(())
    }

    fn handle_middle(&mut self, token: Token) -> Result<()> {
        match token {
            Token::operator(operator) => self.add_operator(operator),
            Token::right_paren => self.add_right_paren(),
            Token::number(_) | Token::identifier{..} | Token::left_paren => {
                Err(CalcError::unexpected_operand(self.expression.into()))
            },
        }
    }

    fn parse_number(&self, content: &str) -> Result<f64> {
        if content.matches('.').count() > 1 {
            return Err(CalcError::multiple_decimal_points(content.into()));
        }
        content
            .parse()
            .map_err(|_| CalcError::syntax(self.expression, format!("'{}' is not a valid number", content)))
    }

    fn add_operand(&mut self, value: f64) {
        let value = if self.negate { -value } else { value };
        self.operands.push(value);
        self.negate = false;
        self.state = ParseState::expect_operator;
    }

    fn apply(&mut self, operator: BinaryOperator) -> Result<()> {
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(CalcError::syntax(self.expression, "missing operand"));
        };
        let value = operator.call(left, right)?;
        tracing::trace!(?operator, left, right, value, "applied");
        self.operands.push(value);
        Ok(())
    }

    fn pop_higher_operator(&mut self, precedence: i32) -> Option<BinaryOperator> {
        let top = self.stack.last().filter(|node| node.precedence() >= precedence)?;
        match *top {
            StackNode::operator(operator) => {
                self.stack.pop();
                Some(operator)
            },
            StackNode::paren{..} => None,
        }
    }

    fn add_operator(&mut self, operator: BinaryOperator) -> Result<()> {
        let precedence = StackNode::operator(operator).precedence();
        while let Some(higher) = self.pop_higher_operator(precedence) {
            self.apply(higher)?;
        }
        self.stack.push(StackNode::operator(operator));
        self.state = ParseState::expect_operand;
        Ok(())
    }

    fn add_right_paren(&mut self) -> Result<()> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::paren{negate} => {
                    // the group's value sits on top once its operators are applied
                    if let (true, Some(value)) = (negate, self.operands.last_mut()) {
                        *value = -*value;
                    }
                    return Ok(());
                },
                StackNode::operator(operator) => self.apply(operator)?,
            }
        }
        Err(CalcError::syntax(self.expression, "could not find matching '('"))
    }

    pub fn finish(mut self) -> Result<f64> {
        if self.state == ParseState::expect_operand {
            let reason = if self.operands.is_empty() && self.stack.is_empty() && !self.negate {
                "expression is empty"
            } else {
                "expression ended abruptly"
            };
            return Err(CalcError::syntax(self.expression, reason));
        }
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::paren{..} => {
                    return Err(CalcError::syntax(self.expression, "could not find matching ')'"))
                },
                StackNode::operator(operator) => self.apply(operator)?,
            }
        }
        match self.operands[..] {
            [value] => Ok(value),
            _ => Err(CalcError::syntax(self.expression, "operands left over")),
        }
    }
}
