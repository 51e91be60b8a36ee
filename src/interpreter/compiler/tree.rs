use crate::{
    error::{CompileError, CompileResult},
    interpreter::{compiler::rpn::RpnToken, program::Node},
};

/// Deepest tree [`build`] accepts.
///
/// Forcing and dropping a node both recurse once per level, so the limit
/// keeps evaluation well inside a default thread stack.
pub const MAX_DEPTH: usize = 256;

/// Builds the lazy node tree from postfix tokens.
///
/// Literals and variables become leaves. Each operator or function token
/// takes as many nodes off the stack as it has operands, keeping their
/// source order. Nothing is evaluated.
///
/// # Parameters
/// - `rpn`: Postfix tokens produced by [`super::rpn::convert`].
///
/// # Returns
/// The root node, or an error when the tokens do not form one tree or the
/// tree would be deeper than [`MAX_DEPTH`].
pub fn build(rpn: &[RpnToken]) -> CompileResult<Node> {
    let mut stack: Vec<(Node, usize)> = Vec::with_capacity(rpn.len());

    for token in rpn {
        match token {
            RpnToken::Literal(value) => stack.push((Node::Literal(value.clone()), 1)),
            RpnToken::Variable { name, binding } => {
                stack.push((Node::Variable { name:    name.clone(),
                                             binding: binding.clone(), },
                            1));
            },
            RpnToken::Operator { operator, position } => {
                let (operands, depth) = take(&mut stack, operator.arity().operands()).ok_or_else(|| {
                                            CompileError::MissingOperand { symbol:   operator.symbol().to_owned(),
                                                                           position: *position, }
                                        })?;
                check_depth(depth, *position)?;
                stack.push((Node::Operator { operator: operator.clone(),
                                             operands },
                            depth));
            },
            RpnToken::Function { function, arity, position } => {
                let (arguments, depth) = take(&mut stack, *arity).ok_or_else(|| {
                                             CompileError::MissingOperand { symbol:   function.name().to_owned(),
                                                                            position: *position, }
                                         })?;
                check_depth(depth, *position)?;
                stack.push((Node::Function { function: function.clone(),
                                             arguments },
                            depth));
            },
        }
    }

    let (root, _) = stack.pop().ok_or(CompileError::EmptyExpression)?;
    if !stack.is_empty() {
        return Err(CompileError::MissingOperator { position: 0 });
    }

    Ok(root)
}

/// Removes the top `count` nodes, oldest first, with the depth of the node
/// that will own them.
fn take(stack: &mut Vec<(Node, usize)>, count: usize) -> Option<(Vec<Node>, usize)> {
    let start = stack.len().checked_sub(count)?;
    let taken = stack.split_off(start);
    let depth = taken.iter().map(|(_, depth)| *depth).max().unwrap_or(0) + 1;

    Some((taken.into_iter().map(|(node, _)| node).collect(), depth))
}

fn check_depth(depth: usize, position: usize) -> CompileResult<()> {
    if depth > MAX_DEPTH {
        return Err(CompileError::NestingTooDeep { limit: MAX_DEPTH,
                                                  position });
    }
    Ok(())
}
