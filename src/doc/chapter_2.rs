/*!
# Variables and Macros

## `name=`

Pops the top of the stack into the variable `name`.

## `name/`

Removes `name` from the innermost scope. Removing a name that isn't there
is an error.

## `$name`

Pushes the value of `name`.

## `@name`

Runs the string stored in `name` as if it were typed. A number stored in
`name` is pushed instead, which makes it a constant.

```text
> 'dup *' sq= 3.14159 pi2= 5 @sq
  1: 25
```

Macros may call macros. Nesting is limited to 256 levels so a macro that
calls itself forever stops with an error.

## Scopes

`scope` opens a new set of variables and `endscope` throws it away.
Names set inside a scope hide the same names outside it; everything
outside can still be read.

```text
> 1 x= scope 2 x= $x endscope $x
  2: 2
  1: 1
```

The first scope is permanent. `vars` prints every visible variable.

Names can't be empty or contain `=` or `$`. Host programs often keep
their settings in variables whose names start with a dot, like
`.plotwin`, so they read like any other variable.

*/
