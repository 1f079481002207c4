/*!
# Introductory Tutorial for RPN

Open a terminal and run `rpn`. If you see the banner and a prompt, you're
ready for this tutorial. Type CTRL-D to exit.
<pre><code>&nbsp;RPN 0.3.0
&nbsp;> █
</code></pre>

Stop a long running line with CTRL-C.

RPN works the way the old pocket calculators did. You put values on a
stack, then operators take values off the top and put their results
back. There are no parentheses and no precedence to remember. Lines you
type are marked with a "`>`". After every line the stack is shown with
the top at the bottom.

<pre><code>&nbsp;> 2 3 +
&nbsp;  1: 5
&nbsp;> 4 *
&nbsp;  1: 20
</code></pre>

Each piece of text separated by spaces is a field. A field is an
operator, a variable reference, or a value. Values get pushed, operators
run. The stack stays between lines so you can work a problem in steps.

<pre><code>&nbsp;> 1 2 3
&nbsp;  4: 20
&nbsp;  3: 1
&nbsp;  2: 2
&nbsp;  1: 3
&nbsp;> clear
</code></pre>

Errors don't lose your work. An operator that fails leaves the stack as
it found it and the failing field is marked.

<pre><code>&nbsp;> 5 0 /
&nbsp;<b>DIVIDE BY ZERO
&nbsp;  IN 5 0 ->/<-</b>
&nbsp;  2: 5
&nbsp;  1: 0
</code></pre>

Integers are written with a suffix telling their base. Anything without
one is a real or complex number.

<pre><code>&nbsp;> clear ffx 1d +
&nbsp;  1: 100x
&nbsp;> dec
&nbsp;  1: 256d
&nbsp;> -1 sqrt
&nbsp;  2: 256d
&nbsp;  1: i
</code></pre>

Name a value by following it with `=` and recall it with `$`. Store a
string and run it with `@` to make your own operators.

<pre><code>&nbsp;> clear 'dup *' square=
&nbsp;> 12 @square
&nbsp;  1: 144
</code></pre>

Type `ops` to see every operator, and `'swap' help` to learn about one.
The chapters that follow cover values, variables and macros, and each
operator in turn.

*/
