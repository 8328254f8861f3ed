use crate::{
    ast::{FunctionDef, Statement},
    interpreter::environment::EnvRef,
};

/// A user-defined function together with the environment it closes over.
///
/// The body is cloned out of the AST when the definition executes, so a
/// function value stays valid after the program that defined it is dropped.
pub struct Function {
    /// The name the function was defined under.
    pub name:    String,
    /// Parameter names, bound positionally at each call.
    pub params:  Vec<String>,
    /// The statements executed by a call.
    pub body:    Vec<Statement>,
    /// The environment active where the definition ran.
    pub closure: EnvRef,
}

impl Function {
    /// Builds a function from its definition and the defining environment.
    #[must_use]
    pub fn new(def: &FunctionDef, closure: EnvRef) -> Self {
        Self { name: def.name.clone(),
               params: def.params.clone(),
               body: def.body.clone(),
               closure }
    }

    /// Number of parameters the function takes.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// The captured environment may hold this very function, so it is left out.
impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}
