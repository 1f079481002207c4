/*!
# Embedding and Errors

## The engine

[`Engine::new`](crate::mach::Engine::new) makes an engine with a stack
limit and nothing else, not even `+`. Call
[`ops::install`](crate::ops::install) for the standard operators or
register your own. `Engine::default()` does both with a stack of 1024.

```
use rpn::mach::{Engine, Frame};

let mut engine = Engine::new(64);
engine.register(
    "answer",
    |e| e.push_frame(Frame::real(42.0)),
    "host",
    "-- the answer",
);
engine.eval("answer").unwrap();
assert_eq!(engine.stack_strings(), ["42"]);
```

Registering a token that already exists replaces it, so hosts can
override any standard operator.

## Hooks

The engine never touches a terminal. `set_print` receives every line
from `print`, `help`, `ops`, and `vars`. `set_input` supplies lines to
`input` and without one `input` fails with `NOT SUPPORTED`.
`set_interrupt` installs a check made before every field and on every
pass of a loop; returning `true` stops evaluation with `INTERRUPTED`.
Host operators that loop can call `check_interrupt` the same way.

## Errors

| Error | Meaning |
|---|---|
| `STACK EMPTY` | nothing to pop, or no scope to close |
| `STACK FULL` | stack limit or macro nesting limit reached |
| `NOT ENOUGH STACK FRAMES` | fewer values than the operator needs |
| `EXPECTED A NUMBER` | a number was needed |
| `EXPECTED A STRING` | a string was needed |
| `EXPECTED A BOOLEAN` | a boolean was needed |
| `EXPECTED A COMPLEX NUMBER` | a number was needed from a variable |
| `ILLEGAL VALUE` | right type, wrong value, such as overflow |
| `ILLEGAL NAME` | variable name empty or holding `=` or `$` |
| `DIVIDE BY ZERO` | |
| `COMPLEX NUMBER NOT SUPPORTED` | operator takes real numbers only |
| `SYNTAX ERROR` | field isn't anything, or bad quoting |
| `NOT FOUND` | no such variable or operator |
| `INTERRUPTED` | the interrupt check fired |
| `NOT SUPPORTED` | the host left this capability out |

Each error lists the fields that were running with the failing one
marked, innermost macro first.

```text
> 'dup x' m= 1 @m
SYNTAX ERROR; NOT A NUMBER
  IN dup ->x<-
  IN 'dup x' m= 1 ->@m<-
  2: 1
  1: 1
```

*/
