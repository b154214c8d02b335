use crate::error_handling::*;
use crate::scanning::*;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    negative,
    positive,
}

impl UnaryOperator {
    pub fn call(&self, value: f64) -> f64 {
        use UnaryOperator::*;
        match self {
            positive => value,
            negative => -value,
        }
    }

    fn symbol(&self) -> char {
        use UnaryOperator::*;
        match self {
            positive => '+',
            negative => '-',
        }
    }

    /// The single sign equivalent to applying `other` and then `self`.
    fn compose(self, other: UnaryOperator) -> UnaryOperator {
        use UnaryOperator::*;
        if self == other { positive } else { negative }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
    exponentiation,
}

impl BinaryOperator {
    /// Division by zero is left to IEEE-754 and yields an infinity or NaN.
    pub fn call(&self, left: f64, right: f64) -> f64 {
        use BinaryOperator::*;

        match self {
            addition => left + right,
            subtraction => left - right,
            multiplication => left * right,
            division => left / right,
            exponentiation => left.powf(right),
        }
    }

    fn symbol(&self) -> char {
        use BinaryOperator::*;
        match self {
            addition => '+',
            subtraction => '-',
            multiplication => '*',
            division => '/',
            exponentiation => '^',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    sqrt,
    sin,
    cos,
    tan,
    log,
    abs,
    pow,
}

impl Function {
    pub fn arity(&self) -> usize {
        use Function::*;
        match self {
            sqrt | sin | cos | tan | log | abs => 1,
            pow => 2,
        }
    }

    /// `arguments` must hold exactly `arity()` values.
    /// Domain errors (`sqrt(-1)`, `log(0)`) come back as NaN or infinity.
    pub(crate) fn call(&self, arguments: &[f64]) -> f64 {
        use Function::*;
        debug_assert_eq!(arguments.len(), self.arity());
        match self {
            sqrt => arguments[0].sqrt(),
            sin => arguments[0].sin(),
            cos => arguments[0].cos(),
            tan => arguments[0].tan(),
            log => arguments[0].ln(),
            abs => arguments[0].abs(),
            pow => arguments[0].powf(arguments[1]),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownFunction;

impl FromStr for Function {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use Function::*;
        match s.to_lowercase().as_str() {
            "sqrt" => Ok(sqrt),
            "sin" => Ok(sin),
            "cos" => Ok(cos),
            "tan" => Ok(tan),
            "log" => Ok(log),
            "abs" => Ok(abs),
            "pow" => Ok(pow),
            _ => Err(UnknownFunction),
        }
    }
}

/// Recursive-descent parser that evaluates as it goes.
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := power (("*" | "/") power)*
/// power      := factor ("^" power)?
/// factor     := ("+" | "-")* ( "|" expression "|"
///                            | "(" expression ")"
///                            | identifier "(" expression ("," expression)? ")"
///                            | number )
/// ```
pub struct Parser<'a> {
    source: StringScanner<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self{source: StringScanner::new(text)}
    }

    /// Fails unless only whitespace remains after the parsed expression.
    pub fn finish(&mut self) -> Result<()> {
        self.source.skip_whitespace();
        if self.source.is_finished() {
            Ok(())
        } else {
            Err(CalcError::unexpected_trailing_input)
        }
    }

    fn binary_operator(&mut self, candidates: &[BinaryOperator]) -> Option<BinaryOperator> {
        candidates.iter().copied().find(|operator| self.source.eat(operator.symbol()))
    }

    fn unary_operator(&mut self) -> Option<UnaryOperator> {
        use UnaryOperator::*;
        [positive, negative].into_iter().find(|operator| self.source.eat(operator.symbol()))
    }

    pub fn expression(&mut self) -> Result<f64> {
        use BinaryOperator::*;
        let mut value = self.term()?;
        while let Some(operator) = self.binary_operator(&[addition, subtraction]) {
            value = operator.call(value, self.term()?);
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64> {
        use BinaryOperator::*;
        let mut value = self.power()?;
        while let Some(operator) = self.binary_operator(&[multiplication, division]) {
            value = operator.call(value, self.power()?);
        }
        Ok(value)
    }

    fn power(&mut self) -> Result<f64> {
        let base = self.factor()?;
        if self.source.eat(BinaryOperator::exponentiation.symbol()) {
            let exponent = self.power()?;
            Ok(BinaryOperator::exponentiation.call(base, exponent))
        } else {
            Ok(base)
        }
    }

    fn factor(&mut self) -> Result<f64> {
        let mut sign = UnaryOperator::positive;
        while let Some(operator) = self.unary_operator() {
            sign = sign.compose(operator);
        }

        if self.source.eat('|') {
            let value = self.expression()?;
            if !self.source.eat('|') {
                return Err(CalcError::mismatched_absolute_bars);
            }
            Ok(sign.call(value).abs())
        } else if self.source.eat('(') {
            let value = self.expression()?;
            if !self.source.eat(')') {
                return Err(CalcError::mismatched_parentheses);
            }
            Ok(sign.call(value))
        } else if self.source.peek().is_some_and(char::is_alphabetic) {
            Ok(sign.call(self.function_call()?))
        } else {
            Ok(sign.call(self.source.number()?))
        }
    }

    fn function_call(&mut self) -> Result<f64> {
        let name = self.source.identifier()?;
        if !self.source.eat('(') {
            return Err(CalcError::expected_open_paren_after_function(name.into()));
        }

        let first = self.expression()?;
        let function: Function = name
            .parse()
            .map_err(|_| CalcError::unknown_function(name.into()))?;

        let mut arguments = Vec::with_capacity(function.arity());
        arguments.push(first);
        if function.arity() == 2 {
            if !self.source.eat(',') {
                return Err(CalcError::expected_comma_in_pow);
            }
            arguments.push(self.expression()?);
        }

        if !self.source.eat(')') {
            return Err(CalcError::expected_close_paren_after_args);
        }

        log::trace!("calling {:?} with {:?}", function, arguments);
        Ok(function.call(&arguments))
    }
}
