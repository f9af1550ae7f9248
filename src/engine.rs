use crate::error::EvalError;
use crate::display_result;
use crate::formula::{evaluate_postfix, to_postfix, tokenize, Token};
use log::debug;
use lru::LruCache;
use rayon::prelude::*;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Evaluates formulas with their compiled postfix form cached by source text.
///
/// Useful when the same formula is re-evaluated as its bindings change, e.g.
/// once per keystroke in a variable input.
pub struct Engine {
    cache: LruCache<String, Arc<[Token]>>,
}

impl Engine {
    /// Creates a new `Engine` holding at most `cache_capacity` compiled formulas.
    /// A capacity of zero is treated as one.
    pub fn new(cache_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Returns the postfix form of `expression`, compiling it on a cache miss.
    /// Failed compilations are not cached.
    pub fn compile(&mut self, expression: &str) -> Result<Arc<[Token]>, EvalError> {
        if let Some(postfix) = self.cache.get(expression) {
            debug!("Cache hit for '{}'", expression);
            return Ok(Arc::clone(postfix));
        }

        debug!("Cache miss for '{}'", expression);
        let postfix: Arc<[Token]> = to_postfix(tokenize(expression)?)?.into();
        self.cache.put(expression.to_string(), Arc::clone(&postfix));
        Ok(postfix)
    }

    pub fn evaluate(
        &mut self,
        expression: &str,
        bindings: &HashMap<String, String>,
    ) -> Result<f64, EvalError> {
        let postfix = self.compile(expression)?;
        evaluate_postfix(&postfix, bindings)
    }

    /// Same contract as [`crate::evaluate_expression`], backed by the cache.
    pub fn evaluate_expression(
        &mut self,
        expression: &str,
        bindings: &HashMap<String, String>,
    ) -> String {
        display_result(expression, || self.evaluate(expression, bindings))
    }

    /// Evaluates one formula against many binding sets in parallel.
    ///
    /// Results come back in the order of `contexts`. If the formula does not
    /// compile, every entry carries that error.
    pub fn evaluate_batch(
        &mut self,
        expression: &str,
        contexts: &[HashMap<String, String>],
    ) -> Vec<Result<f64, EvalError>> {
        let postfix = match self.compile(expression) {
            Ok(postfix) => postfix,
            Err(err) => return vec![Err(err); contexts.len()],
        };

        contexts
            .par_iter()
            .map(|bindings| evaluate_postfix(&postfix, bindings))
            .collect()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxError;

    fn context(x: &str) -> HashMap<String, String> {
        HashMap::from([("x".to_string(), x.to_string())])
    }

    #[test]
    fn test_compile_caches_postfix() {
        let mut engine = Engine::new(4);
        let first = engine.compile("x^2 + 1").unwrap();
        let second = engine.compile("x^2 + 1").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(engine.cache_len(), 1);
    }

    #[test]
    fn test_failed_compile_is_not_cached() {
        let mut engine = Engine::default();
        assert_eq!(
            engine.compile("(x"),
            Err(EvalError::Syntax(SyntaxError::MismatchedParentheses))
        );
        assert_eq!(engine.cache_len(), 0);
    }

    #[test]
    fn test_cache_evicts_least_recently_used() {
        let mut engine = Engine::new(2);
        engine.compile("1").unwrap();
        engine.compile("2").unwrap();
        engine.compile("1").unwrap();
        engine.compile("3").unwrap();
        assert_eq!(engine.cache_len(), 2);

        let cached_one = engine.compile("1").unwrap();
        assert!(Arc::ptr_eq(&cached_one, &engine.compile("1").unwrap()));
        assert_eq!(engine.cache_len(), 2);
    }

    #[test]
    fn test_zero_capacity_still_caches_one() {
        let mut engine = Engine::new(0);
        engine.compile("1 + 1").unwrap();
        engine.compile("2 + 2").unwrap();
        assert_eq!(engine.cache_len(), 1);
    }

    #[test]
    fn test_evaluate_with_changing_bindings() {
        let mut engine = Engine::default();
        assert_eq!(engine.evaluate("2x", &context("5")), Ok(10.0));
        assert_eq!(engine.evaluate("2x", &context("6")), Ok(12.0));
        assert_eq!(engine.cache_len(), 1);
    }

    #[test]
    fn test_evaluate_expression_matches_free_function() {
        let mut engine = Engine::default();
        for expression in ["", "2+3", "x^2", "x^(2)", "(x", "x # 1", "log(8, 2)"] {
            assert_eq!(
                engine.evaluate_expression(expression, &context("4")),
                crate::evaluate_expression(expression, &context("4"))
            );
        }
    }

    #[test]
    fn test_evaluate_batch_keeps_order() {
        let mut engine = Engine::default();
        let contexts: Vec<_> = (1..=50).map(|x| context(&x.to_string())).collect();
        let results = engine.evaluate_batch("x^2", &contexts);
        assert_eq!(results.len(), 50);
        for (i, result) in results.into_iter().enumerate() {
            let x = (i + 1) as f64;
            assert_eq!(result, Ok(x * x));
        }
    }

    #[test]
    fn test_evaluate_batch_reports_per_context_errors() {
        let mut engine = Engine::default();
        let contexts = vec![context("3"), HashMap::new()];
        let results = engine.evaluate_batch("x + 1", &contexts);
        assert_eq!(results[0], Ok(4.0));
        assert_eq!(
            results[1],
            Err(EvalError::UndefinedVariable("x".to_string()))
        );
    }

    #[test]
    fn test_evaluate_batch_compile_error_repeats() {
        let mut engine = Engine::default();
        let results = engine.evaluate_batch("2 # 2", &[context("1"), context("2")]);
        assert_eq!(results, vec![Err(EvalError::Lex('#')), Err(EvalError::Lex('#'))]);
    }

    #[test]
    fn test_clear_cache() {
        let mut engine = Engine::default();
        engine.compile("1").unwrap();
        engine.clear_cache();
        assert_eq!(engine.cache_len(), 0);
    }
}
