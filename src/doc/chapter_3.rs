/*!
# Operators

Each entry shows what an operator takes from the stack and what it
leaves, top of stack on the right. `'swap' help` prints the same line at
the prompt.
*/

pub mod arithmetic {
    /*!
    ## `+ - * / % ^`
    ```text
    > 7 2 %
      1: 1
    > 2d 10d ^
      2: 1
      1: 1024d
    ```
    `neg abs inv sq sqrt exp ln log floor ceil round` act on the top
    value. `sqrt` and `ln` of negative numbers give complex results.
    */
}

pub mod trig {
    /*!
    ## `sin cos tan asin acos atan pi`
    Angles are in radians. These take real numbers only.
    ```text
    > pi 2 / sin
      1: 1
    ```
    */
}

pub mod complex {
    /*!
    ## `re im conj arg cplx`
    `re im cplx` pulls a number apart and puts it back together. `arg` is
    the angle in radians.
    ## `rad deg grad rect`
    Change how a number is shown without changing its value.
    */
}

pub mod base {
    /*!
    ## `dec hex oct bin float`
    Convert a whole number to an integer shown in another base, or an
    integer back to a real.
    ```text
    > 255 hex
      1: ffx
    ```
    */
}

pub mod bitwise {
    /*!
    ## `& | << >>`
    Integers only.
    */
}

pub mod compare {
    /*!
    ## `== != < <= > >=`
    ```text
    > 1 2 <
      1: true
    ```
    */
}

pub mod logic {
    /*!
    ## `and or not`
    Booleans only.
    */
}

pub mod stack {
    /*!
    ## `dup drop swap over rot clear depth pick`
    `n pick` copies the value `n` places below the top, `0 pick` being
    the same as `dup`.
    */
}

pub mod string {
    /*!
    ## `len str num note`
    `str` writes any value as a string and `num` reads one back.
    ```text
    > 'ffx' num 1d +
      1: 100x
    ```
    */
}

pub mod vars {
    /*!
    ## `scope endscope vars`
    See the chapter on variables and macros.
    */
}

pub mod control {
    /*!
    ## `exec`
    Runs a string.
    ## `if ifelse`
    ```text
    > 1 2 < '10' '20' ifelse
      1: 10
    ```
    ## `times for while`
    `n 'body' times` runs a body `n` times. `m n 'body' for` pushes each
    integer from `m` to `n`, counting down if `n` is smaller, and runs the
    body after each. `'cond' 'body' while` runs the body for as long as
    the condition leaves `true`.
    ```text
    > 0d 1 4 '+' for
      1: 10d
    ```
    ## `try`
    Runs a string and pushes `true`, or pushes the error and `false` if
    it failed. CTRL-C is never caught.
    */
}

pub mod io {
    /*!
    ## `print input help ops`
    `print` writes the top value without quotes. `input` reads a line and
    pushes it as a string.
    */
}

pub mod misc {
    /*!
    ## `rand now date`
    A random number from 0 up to 1, the Unix time in seconds, and the
    current UTC date and time as text.
    */
}
