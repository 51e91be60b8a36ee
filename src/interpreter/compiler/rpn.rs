use std::{fmt, sync::Arc};

use crate::{
    error::{CompileError, CompileResult},
    interpreter::{
        lexer::Token,
        symbols::{Binding, Function, Operator, OperatorArity, OperatorTable, Symbols},
        value::core::Variant,
    },
    util::num::format_number,
};

/// One token of a compiled program in postfix order.
///
/// Every name is already resolved: variables carry their binding, operators
/// and functions carry their table entry.
#[derive(Debug, Clone)]
pub enum RpnToken {
    /// A number or string literal.
    Literal(Variant),
    /// A resolved variable.
    Variable {
        /// The name as written in source.
        name:    String,
        /// What the name was bound to.
        binding: Binding,
    },
    /// A resolved operator.
    Operator {
        /// The table entry.
        operator: Arc<Operator>,
        /// Byte offset of the symbol.
        position: usize,
    },
    /// A resolved function call with its argument count.
    Function {
        /// The table entry.
        function: Arc<Function>,
        /// Number of arguments in the call.
        arity:    usize,
        /// Byte offset of the function name.
        position: usize,
    },
}

impl fmt::Display for RpnToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(Variant::String(s)) => write!(f, "{:?}", &**s),
            Self::Literal(Variant::Number(n)) => f.write_str(&format_number(*n)),
            Self::Literal(value) => write!(f, "{value}"),
            Self::Variable { name, .. } => f.write_str(name),
            Self::Operator { operator, .. } => f.write_str(operator.symbol()),
            Self::Function { function, .. } => f.write_str(function.name()),
        }
    }
}

/// An entry on the operator stack.
enum Stacked {
    Operator { operator: Arc<Operator>, position: usize },
    Open,
}

/// An open parenthesis: a call's argument list or a grouping.
struct Frame {
    function: Option<Arc<Function>>,
    position: usize,
    commas:   usize,
    seen:     bool,
}

/// Converts tokens into postfix order using the shunting-yard algorithm.
///
/// Operator runs are split against `symbols.operators`, identifiers are
/// resolved against the variable and function tables, and each call's
/// argument count is checked against the function's arity.
///
/// # Parameters
/// - `source`: The source text, for end-of-input positions.
/// - `tokens`: Output of [`crate::interpreter::lexer::tokenize`].
/// - `symbols`: The expression's resolved tables.
///
/// # Returns
/// The postfix token list, or the first compile error found.
pub fn convert(source: &str, tokens: &[(Token, usize)], symbols: &Symbols) -> CompileResult<Vec<RpnToken>> {
    let tokens = split_symbols(tokens, &symbols.operators)?;

    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Stacked> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut expect_operand = true;
    let mut iter = tokens.iter().peekable();

    while let Some((token, position)) = iter.next() {
        let position = *position;

        if *token != Token::RParen
           && let Some(frame) = frames.last_mut()
        {
            frame.seen = true;
        }

        match token {
            Token::Number(n) => {
                require_operand(expect_operand, position)?;
                output.push(RpnToken::Literal(Variant::Number(*n)));
                expect_operand = false;
            },
            Token::Str(s) => {
                require_operand(expect_operand, position)?;
                output.push(RpnToken::Literal(Variant::from(s.as_str())));
                expect_operand = false;
            },
            Token::Identifier(name) => {
                require_operand(expect_operand, position)?;

                if let Some((Token::LParen, _)) = iter.peek() {
                    iter.next();
                    let function =
                        symbols.functions
                               .get(name)
                               .cloned()
                               .ok_or_else(|| CompileError::UnknownFunction { name: name.clone(),
                                                                              position })?;
                    stack.push(Stacked::Open);
                    frames.push(Frame { function: Some(function),
                                        position,
                                        commas: 0,
                                        seen: false });
                } else {
                    let binding = symbols.variables
                                         .get(name)
                                         .cloned()
                                         .ok_or_else(|| CompileError::UnknownVariable { name: name.clone(),
                                                                                        position })?;
                    output.push(RpnToken::Variable { name: name.clone(),
                                                     binding });
                    expect_operand = false;
                }
            },
            Token::Symbols(symbol) => {
                if expect_operand
                   && (symbol == "-" || symbol == "+")
                   && let Some(n) = signed_operand(iter.clone(), symbols)
                {
                    let value = if symbol == "-" { -n } else { n };
                    iter.next();
                    output.push(RpnToken::Literal(Variant::Number(value)));
                    expect_operand = false;
                    continue;
                }

                let operator = symbols.operators
                                      .get(symbol)
                                      .cloned()
                                      .ok_or_else(|| CompileError::UnknownOperator { symbol: symbol.clone(),
                                                                                     position })?;

                match (operator.arity(), expect_operand) {
                    (OperatorArity::Unary, true) => {
                        stack.push(Stacked::Operator { operator, position });
                    },
                    (OperatorArity::Unary, false) => {
                        return Err(CompileError::MissingOperator { position });
                    },
                    (OperatorArity::Binary, true) => {
                        return Err(CompileError::MissingOperand { symbol: symbol.clone(),
                                                                  position });
                    },
                    (OperatorArity::Binary, false) => {
                        while let Some(Stacked::Operator { operator: top, .. }) = stack.last()
                              && top.yields_to(&operator)
                        {
                            pop_operator(&mut stack, &mut output);
                        }
                        stack.push(Stacked::Operator { operator, position });
                        expect_operand = true;
                    },
                }
            },
            Token::LParen => {
                require_operand(expect_operand, position)?;
                stack.push(Stacked::Open);
                frames.push(Frame { function: None,
                                    position,
                                    commas: 0,
                                    seen: false });
            },
            Token::Comma => {
                let Some(frame) = frames.last_mut() else {
                    return Err(CompileError::MisplacedComma { position });
                };
                if frame.function.is_none() {
                    return Err(CompileError::MisplacedComma { position });
                }
                if expect_operand {
                    return Err(CompileError::MissingOperand { symbol: ",".to_owned(),
                                                              position });
                }
                frame.commas += 1;
                unwind(&mut stack, &mut output);
                expect_operand = true;
            },
            Token::RParen => {
                let Some(frame) = frames.pop() else {
                    return Err(CompileError::UnbalancedParentheses { position });
                };

                let empty_call = frame.function.is_some() && !frame.seen;
                if expect_operand && !empty_call {
                    return Err(CompileError::MissingOperand { symbol: ")".to_owned(),
                                                              position });
                }

                unwind(&mut stack, &mut output);
                stack.pop();

                if let Some(function) = frame.function {
                    let found = if empty_call { 0 } else { frame.commas + 1 };
                    if !function.arity().check(found) {
                        return Err(CompileError::ArgumentCountMismatch { name: function.name().to_owned(),
                                                                         expected: function.arity(),
                                                                         found,
                                                                         position: frame.position });
                    }
                    output.push(RpnToken::Function { function,
                                                     arity: found,
                                                     position: frame.position });
                }
                expect_operand = false;
            },
        }
    }

    if tokens.is_empty() {
        return Err(CompileError::EmptyExpression);
    }
    if expect_operand {
        return Err(CompileError::UnexpectedEndOfInput { position: source.len() });
    }
    if let Some(frame) = frames.last() {
        return Err(CompileError::UnbalancedParentheses { position: frame.position });
    }

    while !stack.is_empty() {
        pop_operator(&mut stack, &mut output);
    }

    Ok(output)
}

/// Splits every operator run into table symbols by longest match.
///
/// `>=!` splits into `>=` and `!` when both are registered. The first piece
/// that matches no symbol is reported as an unknown operator.
fn split_symbols(tokens: &[(Token, usize)], operators: &OperatorTable) -> CompileResult<Vec<(Token, usize)>> {
    let mut split = Vec::with_capacity(tokens.len());

    for (token, position) in tokens {
        let Token::Symbols(run) = token else {
            split.push((token.clone(), *position));
            continue;
        };

        let mut offset = 0;
        while offset < run.len() {
            let rest = &run[offset..];
            let length = (1..=rest.len()).rev()
                                         .find(|&len| operators.contains(&rest[..len]))
                                         .ok_or_else(|| CompileError::UnknownOperator { symbol:   rest.to_owned(),
                                                                                        position: position + offset, })?;
            split.push((Token::Symbols(rest[..length].to_owned()), position + offset));
            offset += length;
        }
    }

    Ok(split)
}

/// The number a leading sign folds into.
///
/// That is a numeric literal, or a name bound to a numeric constant that is
/// not being called. Anything else leaves the sign to the operator table.
fn signed_operand<'a>(mut ahead: impl Iterator<Item = &'a (Token, usize)>, symbols: &Symbols) -> Option<f64> {
    let name = match ahead.next()? {
        (Token::Number(n), _) => return Some(*n),
        (Token::Identifier(name), _) => name,
        _ => return None,
    };

    if let Some((Token::LParen, _)) = ahead.next() {
        return None;
    }

    match symbols.variables.get(name)? {
        Binding::Constant(Variant::Number(n)) => Some(*n),
        _ => None,
    }
}

fn require_operand(expect_operand: bool, position: usize) -> CompileResult<()> {
    if expect_operand {
        Ok(())
    } else {
        Err(CompileError::MissingOperator { position })
    }
}

/// Moves the top stacked operator to the output. Open markers are dropped.
fn pop_operator(stack: &mut Vec<Stacked>, output: &mut Vec<RpnToken>) {
    if let Some(Stacked::Operator { operator, position }) = stack.pop() {
        output.push(RpnToken::Operator { operator, position });
    }
}

/// Emits stacked operators down to (not including) the nearest open marker.
fn unwind(stack: &mut Vec<Stacked>, output: &mut Vec<RpnToken>) {
    while let Some(Stacked::Operator { .. }) = stack.last() {
        pop_operator(stack, output);
    }
}
